pub mod app;
pub mod image_box;
pub mod lightbox_overlay;
