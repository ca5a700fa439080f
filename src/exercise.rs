//! DNAr code-generation exercises.
//!
//! An exercise is a prompt kind, a difficulty level and a circuit. Together
//! they name a template file: `<kind>_<level>_<circuit>`, e.g.
//! `tipo1_codigo_facil_adicao`. The string forms below are the parts used in
//! those file names, so they must not change.

use crate::template::Bindings;
use clap::ValueEnum;
use std::fmt;

/// Placeholder the DNAr reference is bound to for documentation prompts.
pub const DOCUMENTATION_KEY: &str = "DNAR_DOCUMENTATION";

/// How the prompt asks for code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PromptKind {
    /// Ask for the code only.
    #[value(name = "tipo1_codigo")]
    CodeOnly,
    /// Ask for the code and include the DNAr reference in the prompt.
    #[value(name = "tipo2_documentacao")]
    WithDocumentation,
    /// Walk the model through the task step by step.
    #[value(name = "tipo3_passoapasso")]
    StepByStep,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::CodeOnly => "tipo1_codigo",
            PromptKind::WithDocumentation => "tipo2_documentacao",
            PromptKind::StepByStep => "tipo3_passoapasso",
        }
    }
}

/// Difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Level {
    /// Simple addition.
    #[value(name = "facil")]
    Easy,
    /// Multiplication or an activation function.
    #[value(name = "medio")]
    Medium,
    /// Perceptron: a chain of operations.
    #[value(name = "dificil")]
    Hard,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "facil",
            Level::Medium => "medio",
            Level::Hard => "dificil",
        }
    }
}

/// Circuit the generated code should simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Circuit {
    #[value(name = "adicao")]
    Addition,
    #[value(name = "multiplicacao")]
    Multiplication,
    /// Sigmoid activation.
    #[value(name = "ativacao")]
    Activation,
    #[value(name = "perceptron")]
    Perceptron,
    #[value(name = "relu")]
    Relu,
}

impl Circuit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Circuit::Addition => "adicao",
            Circuit::Multiplication => "multiplicacao",
            Circuit::Activation => "ativacao",
            Circuit::Perceptron => "perceptron",
            Circuit::Relu => "relu",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(PromptKind, Level, Circuit);

/// One exercise: kind, level and circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub kind: PromptKind,
    pub level: Level,
    pub circuit: Circuit,
}

impl Exercise {
    pub fn new(kind: PromptKind, level: Level, circuit: Circuit) -> Self {
        Self {
            kind,
            level,
            circuit,
        }
    }

    /// Template name for this exercise.
    pub fn template_name(&self) -> String {
        format!("{}_{}_{}", self.kind, self.level, self.circuit)
    }

    /// Extra bindings the prompt kind needs.
    pub fn bindings(&self) -> Bindings {
        let mut bindings = Bindings::new();
        if self.kind == PromptKind::WithDocumentation {
            bindings.insert(DOCUMENTATION_KEY, DNAR_DOCUMENTATION);
        }
        bindings
    }

    /// Advisory message when the circuit is unusual for the level.
    ///
    /// Unusual combinations are still allowed.
    pub fn combination_warning(&self) -> Option<String> {
        let expected: &[Circuit] = match self.level {
            Level::Easy => &[Circuit::Addition],
            Level::Medium => &[Circuit::Multiplication, Circuit::Activation, Circuit::Relu],
            Level::Hard => &[Circuit::Perceptron],
        };

        if expected.contains(&self.circuit) {
            return None;
        }

        let names: Vec<String> = expected.iter().map(|c| format!("'{}'", c)).collect();
        Some(format!(
            "level '{}' usually uses circuit {} (got '{}')",
            self.level,
            names.join(" or "),
            self.circuit
        ))
    }
}

/// DNAr reference bound to `{DNAR_DOCUMENTATION}` for documentation prompts.
pub const DNAR_DOCUMENTATION: &str = r#"
DNAr - Simulate Chemical Reaction Networks based on DNA in R

MAIN FUNCTIONS:

1. react(species, ci, reactions, ki, t)
   Simulates a formal Chemical Reaction Network (CRN).

   Parameters:
   - species: character vector with the names of every chemical species
   - ci: numeric vector with the initial concentrations (same order as species)
   - reactions: character vector of reactions such as 'A -> B' or 'A + B -> C + Waste'
   - ki: numeric vector with the rate constant of each reaction
   - t: numeric vector with the simulation time points

   Returns: data.frame with the behaviour of every species over time

2. react_4domain(species, ci, reactions, ki, t, cmax, qmax, alpha, beta)
   Simulates a DNA-based CRN using the 4-domain model.

   Additional parameters:
   - cmax: maximum concentration used for normalisation
   - qmax: maximum rate used for normalisation
   - alpha: scale parameter (default: 1)
   - beta: scale parameter (default: 1)

   Returns: list with 'behavior' (data.frame) and 'dsd' (Visual DSD code)

3. plot_behavior(behavior, species = NULL, x_label = "Time", y_label = "Concentration", legend_name = "Species")
   Plots species behaviour over time.

   Parameters:
   - behavior: data.frame returned by react() or react_4domain()$behavior
   - species: character vector of species to plot (optional)
   - x_label, y_label, legend_name: plot labels

BASIC EXAMPLE:

library(DNAr)
library(ggplot2)
library(dplyr)

species <- c("InputA", "InputB", "Output", "Waste")
reactions <- c("InputA + InputB -> Output + Waste")
ci <- c(10, 5, 0, 0)
ki <- c(0.1)
t <- seq(0, 100, 0.1)

result <- react(species, ci, reactions, ki, t)
plot_behavior(result, species = c("InputA", "InputB", "Output"))

REACTION FORMAT:
- Simple reaction: 'A -> B'
- Several reactants: 'A + B -> C'
- Several products: 'A -> B + C + Waste'
- Full reaction: 'A + B -> C + D + Waste'

NOTES:
- Every species must be listed in 'species'
- 'ci' must have the same length and order as 'species'
- 'ki' must have the same length as 'reactions'
- Use 'Waste' for species that are reaction by-products
"#;
