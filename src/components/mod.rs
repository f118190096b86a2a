pub mod draggable;
