/// Chart descriptors and the parameterized chart renderer
pub mod chart;
/// Display regions and chart slots of the dashboard
pub mod dashboard;
/// Static HTML export
pub mod html;
/// Terminal tables
pub mod terminal;
