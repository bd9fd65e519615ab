mod error_display;
mod loading_spinner;
mod pie_chart;
mod results_panel;
mod survey_form;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use pie_chart::PieChart;
pub use results_panel::ResultsPanel;
pub use survey_form::SurveyForm;
