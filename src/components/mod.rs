pub mod app;
pub mod calculator_form;
pub mod results_panel;

pub use app::App;
pub use calculator_form::CalculatorForm;
pub use results_panel::ResultsPanel;
