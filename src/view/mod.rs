pub(crate) mod bubble_image;
