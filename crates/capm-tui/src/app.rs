//! Application state management for the calculator TUI.

use capm::{
    format_result, validate_inputs, CalculationObserver, CalculatorConfig, CapmCalculator,
    CapmInputs, DisplayConfig, ExpectedReturnModel, SliderConfig, TracingObserver,
};

/// Generic user-facing message for any calculation failure. Detail goes
/// to the operator log only.
pub(crate) const CALCULATION_FAILED_MESSAGE: &str =
    "Calculation failed. The expected return was not updated.";

/// Main application state.
pub struct App {
    /// Currently selected control
    pub selected: Control,
    /// Current input mode
    pub input_mode: InputMode,
    /// Risk-free rate slider
    pub risk_free_rate: SliderState,
    /// Beta slider
    pub beta: SliderState,
    /// Expected market return slider
    pub expected_market_return: SliderState,
    /// Last computed expected return; `None` until the first calculation
    pub result: Option<f64>,
    /// Message shown in the error dialog
    pub error_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    display: DisplayConfig,
    model: Box<dyn ExpectedReturnModel>,
    observer: Box<dyn CalculationObserver>,
}

impl App {
    pub fn new() -> Self {
        Self::with_model(Box::new(CapmCalculator::new()), Box::new(TracingObserver::new()))
    }

    /// Build an app around a specific model and telemetry hook.
    pub fn with_model(
        model: Box<dyn ExpectedReturnModel>,
        observer: Box<dyn CalculationObserver>,
    ) -> Self {
        let config = CalculatorConfig::default();
        Self {
            selected: Control::default(),
            input_mode: InputMode::default(),
            risk_free_rate: SliderState::new(config.risk_free_rate),
            beta: SliderState::new(config.beta),
            expected_market_return: SliderState::new(config.expected_market_return),
            result: None,
            error_message: None,
            should_quit: false,
            display: DisplayConfig::default(),
            model,
            observer,
        }
    }

    /// Slider for a control.
    pub fn slider(&self, control: Control) -> &SliderState {
        match control {
            Control::RiskFreeRate => &self.risk_free_rate,
            Control::Beta => &self.beta,
            Control::ExpectedMarketReturn => &self.expected_market_return,
        }
    }

    /// Mutable slider for a control.
    pub fn slider_mut(&mut self, control: Control) -> &mut SliderState {
        match control {
            Control::RiskFreeRate => &mut self.risk_free_rate,
            Control::Beta => &mut self.beta,
            Control::ExpectedMarketReturn => &mut self.expected_market_return,
        }
    }

    /// Move selection to the next control.
    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    /// Move selection to the previous control.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.previous();
    }

    /// Step the selected slider up.
    pub fn adjust_up(&mut self) {
        let selected = self.selected;
        self.slider_mut(selected).increment();
    }

    /// Step the selected slider down.
    pub fn adjust_down(&mut self) {
        let selected = self.selected;
        self.slider_mut(selected).decrement();
    }

    /// Run one calculation request against the current slider values.
    ///
    /// On success the displayed result is replaced; on failure it is left
    /// untouched and the error dialog opens.
    pub fn calculate(&mut self) {
        let inputs = self.read_inputs();
        self.apply_calculation(inputs);
    }

    /// Snapshot the current control values as formula inputs.
    fn read_inputs(&self) -> capm::Result<CapmInputs> {
        let inputs = CapmInputs::new(
            self.risk_free_rate.value(),
            self.beta.value(),
            self.expected_market_return.value(),
        );
        validate_inputs(&inputs)?;
        Ok(inputs)
    }

    fn apply_calculation(&mut self, inputs: capm::Result<CapmInputs>) {
        match inputs {
            Ok(inputs) => {
                let result = self.model.expected_return(&inputs);
                self.observer.on_calculation(&inputs, result);
                self.result = Some(result);
            }
            Err(err) => {
                // Detail goes to the operator log; the user only sees the
                // generic dialog message
                tracing::error!(%err, "calculation request failed");
                self.observer.on_failure(&err);
                self.error_message = Some(CALCULATION_FAILED_MESSAGE.to_string());
                self.input_mode = InputMode::ErrorDialog;
            }
        }
    }

    /// Close the error dialog and return to normal input handling.
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
        self.input_mode = InputMode::Normal;
    }

    /// The result line as displayed, placeholder included.
    pub fn result_text(&self) -> String {
        format_result(&self.display, self.result)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// The three input controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    RiskFreeRate,
    Beta,
    ExpectedMarketReturn,
}

impl Control {
    pub fn next(self) -> Self {
        match self {
            Control::RiskFreeRate => Control::Beta,
            Control::Beta => Control::ExpectedMarketReturn,
            Control::ExpectedMarketReturn => Control::RiskFreeRate,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Control::RiskFreeRate => Control::ExpectedMarketReturn,
            Control::Beta => Control::RiskFreeRate,
            Control::ExpectedMarketReturn => Control::Beta,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Control::RiskFreeRate => "Risk-Free Rate",
            Control::Beta => "Beta",
            Control::ExpectedMarketReturn => "Expected Market Return",
        }
    }

    pub fn all() -> &'static [Control] {
        &[
            Control::RiskFreeRate,
            Control::Beta,
            Control::ExpectedMarketReturn,
        ]
    }
}

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    ErrorDialog,
}

/// One bounded slider, positioned on a discrete step grid.
///
/// Positions are integer step counts so repeated adjustment cannot drift
/// off the grid and the bounds are reached exactly.
#[derive(Debug, Clone, Copy)]
pub struct SliderState {
    config: SliderConfig,
    position: u32,
}

impl SliderState {
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            position: 0,
        }
    }

    /// Current numeric value of the slider.
    pub fn value(&self) -> f64 {
        self.config.value_at(self.position)
    }

    /// Step up, clamped at the upper bound.
    pub fn increment(&mut self) {
        if self.position < self.config.steps() {
            self.position += 1;
        }
    }

    /// Step down, clamped at the lower bound.
    pub fn decrement(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// Jump straight to a position, clamped to the grid.
    #[allow(dead_code)] // Exercised by state-machine tests
    pub fn set_position(&mut self, position: u32) {
        self.position = position.min(self.config.steps());
    }

    /// Fill fraction in [0, 1] for gauge rendering.
    pub fn ratio(&self) -> f64 {
        let steps = self.config.steps();
        if steps == 0 {
            0.0
        } else {
            self.position as f64 / steps as f64
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }
}
