pub mod audio;
pub mod ca_copy_box;
pub mod cap_display;
pub mod dynamic_image;
pub mod falling_items;
pub mod flying_texts;
pub mod status;
pub mod template;
