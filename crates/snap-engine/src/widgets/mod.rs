pub mod button;
pub mod draggable;
pub mod slot;
