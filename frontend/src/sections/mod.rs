pub mod cta;
pub mod features;
pub mod hero;
pub mod how_it_works;
pub mod pricing;
pub mod solutions;
pub mod testimonials;
pub mod why_choose_us;
