// crates/spiadc-core/tests/frame_assemble.rs

use spiadc_core::frame::assemble::{assemble, assemble_vec};
use spiadc_core::{Endian, FrameLayout};

#[test]
fn two_channel_big_endian_frame() {
    let frame = [0x10, 0x20, 0x30, 0xFF, 0xFF, 0xFF];
    let layout = FrameLayout::new(frame.len()).expect("layout");
    assert_eq!(layout.channels(), 2);

    let mut out = [0i32; 2];
    let n = assemble(&frame, Endian::Big, &mut out).expect("assemble");
    assert_eq!(n, 2);
    assert_eq!(out, [1_056_816, -1]);
}

#[test]
fn little_endian_frame_reverses_each_field_only() {
    let frame = [0x30, 0x20, 0x10, 0x00, 0x00, 0x80, 0x01, 0x00, 0x00];
    assert_eq!(
        assemble_vec(&frame, Endian::Little),
        vec![1_056_816, -8_388_608, 1]
    );
}

#[test]
fn assemble_keeps_channel_order() {
    // 8 channels, channel k carries value k.
    let mut frame = Vec::with_capacity(24);
    for k in 0u8..8 {
        frame.extend_from_slice(&[0, 0, k]);
    }
    let layout = FrameLayout::new(frame.len()).unwrap();
    assert_eq!(layout.channels(), 8);

    let mut out = vec![0i32; layout.channels()];
    assemble(&frame, Endian::Big, &mut out).unwrap();
    assert_eq!(out, (0..8).collect::<Vec<i32>>());
    assert_eq!(assemble_vec(&frame, Endian::Big), out);
}

#[test]
fn layout_rejects_non_multiple_lengths() {
    assert!(FrameLayout::new(0).is_err());
    assert!(FrameLayout::new(4).is_err());
    assert!(FrameLayout::new(25).is_err());

    let l = FrameLayout::new(24).unwrap();
    assert_eq!((l.frame_len(), l.channels()), (24, 8));
    assert_eq!(FrameLayout::with_channels(8).unwrap(), l);
    assert!(FrameLayout::with_channels(0).is_err());
}

#[test]
fn assemble_rejects_short_output_buffer() {
    let frame = [0x10, 0x20, 0x30, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x01];
    let mut out = [7i32; 2];
    let err = assemble(&frame, Endian::Big, &mut out).unwrap_err();
    assert!(err.to_string().contains("frame has 3 channels"), "{err}");
    assert_eq!(out, [7, 7], "nothing written on failure");

    let mut roomy = [0i32; 4];
    assert_eq!(assemble(&frame, Endian::Big, &mut roomy).unwrap(), 3);
    assert_eq!(roomy, [1_056_816, -1, 1, 0]);
}
