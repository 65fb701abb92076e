pub(crate) mod draw_board;
pub(crate) mod hole_mask;
pub(crate) mod hole_writer;
