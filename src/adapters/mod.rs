// Adapters layer: export formats consuming the planner's output. These
// are formatting concerns only; nothing here re-plans or mutates state.

pub mod google;
pub mod ics;
pub mod json;
pub mod text;

pub use google::GoogleLinkExporter;
pub use ics::IcsExporter;
pub use json::JsonExporter;
pub use text::TextExporter;
