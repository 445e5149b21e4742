// Interface adapters: file formats, frame protocol and presentation sinks.

pub mod dispatch;
pub mod frame_serializer;
pub mod level_file;
pub mod protocol;
pub mod script;
pub mod utils;
