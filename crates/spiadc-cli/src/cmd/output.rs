use clap::{Args, ValueEnum};
use spiadc_core::defaults;
use spiadc_core::signal::sample::{MAX_I24, MIN_I24};
use spiadc_core::{Endian, Mapper};

use crate::io::out::Format;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ByteOrder {
    /// MSB first within each 24-bit field
    Be,
    /// LSB first within each 24-bit field
    Le,
}

impl From<ByteOrder> for Endian {
    fn from(b: ByteOrder) -> Self {
        match b {
            ByteOrder::Be => Endian::Big,
            ByteOrder::Le => Endian::Little,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Full 24-bit range onto i16
    I16,
    /// Full 24-bit range onto i8
    I8,
    /// Use --in-min/--in-max/--out-min/--out-max
    Custom,
}

/// Mapping and rendering options shared by `acquire` and `replay`.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output range profile for mapped samples
    #[arg(long, value_enum, default_value_t = Profile::I16)]
    pub profile: Profile,

    /// Input domain lower bound (custom profile)
    #[arg(long, default_value_t = MIN_I24, allow_hyphen_values = true)]
    pub in_min: i32,

    /// Input domain upper bound (custom profile)
    #[arg(long, default_value_t = MAX_I24, allow_hyphen_values = true)]
    pub in_max: i32,

    /// Output range lower bound (custom profile)
    #[arg(long, allow_hyphen_values = true)]
    pub out_min: Option<i32>,

    /// Output range upper bound (custom profile)
    #[arg(long, allow_hyphen_values = true)]
    pub out_max: Option<i32>,

    /// How to print each frame
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Full-scale reference in volts (volts format)
    #[arg(long, default_value_t = defaults::VREF_VOLTS)]
    pub vref: f64,

    /// Also print raw frame bytes and sign-extended samples
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

impl OutputArgs {
    pub fn mapper(&self) -> anyhow::Result<Mapper> {
        if self.profile != Profile::Custom && (self.out_min.is_some() || self.out_max.is_some())
        {
            anyhow::bail!("--out-min/--out-max only apply to --profile custom");
        }
        let m = match self.profile {
            Profile::I16 => Mapper::i24_to_i16()?,
            Profile::I8 => Mapper::i24_to_i8()?,
            Profile::Custom => {
                let (Some(out_min), Some(out_max)) = (self.out_min, self.out_max) else {
                    anyhow::bail!("--profile custom requires --out-min and --out-max");
                };
                Mapper::new(self.in_min, self.in_max, out_min, out_max)?
            }
        };
        Ok(m)
    }
}
