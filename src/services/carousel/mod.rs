mod rotator;

pub use rotator::{CarouselRotator, CAROUSEL_ADVANCE_MS};
