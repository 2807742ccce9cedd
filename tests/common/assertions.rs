//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::fixtures::DecodedGif;

/// Assert bytes start with a GIF89a header
pub fn assert_gif(bytes: &[u8]) {
    assert!(
        bytes.len() > 6 && &bytes[..6] == b"GIF89a",
        "Expected GIF89a, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..bytes.len().min(8)]
    );
}

/// Assert an animation loops forever with `count` frames of `delay`
pub fn assert_looping(gif: &DecodedGif, count: usize, delay: u16) {
    assert_eq!(gif.repeat, gif::Repeat::Infinite, "GIF should loop forever");
    assert_eq!(gif.frames.len(), count, "frame count");
    assert!(
        gif.frames.iter().all(|f| f.delay == delay),
        "Expected every delay to be {delay}, got {:?}",
        gif.delays()
    );
}

/// Assert no frame carries a local color table
pub fn assert_single_palette(gif: &DecodedGif) {
    assert!(
        gif.frames.iter().all(|f| f.palette.is_none()),
        "Frames should use the global color table only"
    );
}
