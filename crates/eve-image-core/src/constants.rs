//! Image server constants.

/// Host of the image server.
pub const BASE_URL: &str = "https://images.evetech.net";

/// Sizes (in pixels) the image server renders, smallest first.
pub const VALID_SIZES: [u32; 6] = [32, 64, 128, 256, 512, 1024];

/// Size used when a request asks for one the server does not render.
pub const DEFAULT_SIZE: u32 = 128;
