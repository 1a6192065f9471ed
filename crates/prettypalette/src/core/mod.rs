mod classify;
mod conversion;
mod difference;
mod equality;

// classify
pub(crate) use classify::similarity_group;
pub use classify::{Temperature, SIMILARITY_GROUPS};

// conversion
pub use conversion::Hsv;
pub(crate) use conversion::{greyscale, luminance, normalize, rgb_to_hsv};

// difference
pub(crate) use difference::{distance, hue_distance, rotate_hue};

// equality
pub use equality::to_eq_bits;
