pub mod carousel;

pub use carousel::{Carousel, CarouselProps};
