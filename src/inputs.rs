//! Solver input parameters.
//!
//! [`SolverInputs`] is a plain value object, loaded once at startup and
//! passed by reference to whatever needs it. Initial and boundary condition
//! callables are supplied by the application and are not part of it.
//!
//! ```rust
//! use ale_topology::inputs::{MeshRecipe, SolverInputs};
//!
//! let inputs = SolverInputs::from_json_str(r#"{
//!     "prefix": "sod",
//!     "cfl": { "acoustic": 0.25, "volume": 0.1, "growth": 1.01 },
//!     "final_time": 0.2,
//!     "initial_time_step": 1e-5,
//!     "max_steps": 20000,
//!     "eos": { "type": "ideal_gas", "gas_constant": 1.4, "specific_heat": 1.0 },
//!     "mesh": { "type": "box", "dimensions": [100, 10], "xmin": [0.0, 0.0], "xmax": [1.0, 0.1] }
//! }"#)?;
//! assert_eq!(inputs.mesh_dimension(), Some(2));
//! assert!(matches!(inputs.mesh, MeshRecipe::Box { .. }));
//! # Ok::<(), ale_topology::inputs::ConfigError>(())
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating solver inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown file extension for \"{0}\"")]
    UnknownExtension(PathBuf),
    #[error("invalid input `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// CFL-type time step limiters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CflConstants {
    /// Acoustic (sound-speed) limit.
    pub acoustic: f64,
    /// Maximum relative volume change per step.
    pub volume: f64,
    /// Maximum growth factor of the time step.
    pub growth: f64,
}

/// Equation-of-state selection; the EOS object itself lives in the solver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum EosSpec {
    IdealGas {
        gas_constant: f64,
        specific_heat: f64,
    },
}

/// How the mesh front-end should build the mesh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum MeshRecipe {
    /// Structured box with `dimensions[d]` cells along axis `d`.
    Box {
        dimensions: Vec<usize>,
        xmin: Vec<f64>,
        xmax: Vec<f64>,
    },
    /// Mesh file handed to a reader.
    Read { file: PathBuf },
}

/// All solver-level inputs of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverInputs {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_postfix")]
    pub postfix: String,
    /// Output every `output_freq` steps; 0 disables output.
    #[serde(default)]
    pub output_freq: usize,
    pub cfl: CflConstants,
    pub final_time: f64,
    pub initial_time_step: f64,
    pub max_steps: usize,
    pub eos: EosSpec,
    pub mesh: MeshRecipe,
}

fn default_prefix() -> String {
    "output".to_string()
}

fn default_postfix() -> String {
    "dat".to_string()
}

impl SolverInputs {
    /// Loads and validates an input file, dispatching on its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                let text = std::fs::read_to_string(path)?;
                log::debug!("loading solver inputs from {}", path.display());
                Self::from_json_str(&text)
            }
            _ => Err(ConfigError::UnknownExtension(path.to_path_buf())),
        }
    }

    /// Parses and validates JSON input.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let inputs: SolverInputs = serde_json::from_str(text)?;
        inputs.validate()?;
        Ok(inputs)
    }

    /// Dimension implied by the mesh recipe, when it states one.
    pub fn mesh_dimension(&self) -> Option<usize> {
        match &self.mesh {
            MeshRecipe::Box { dimensions, .. } => Some(dimensions.len()),
            MeshRecipe::Read { .. } => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("cfl.acoustic", self.cfl.acoustic)?;
        positive("cfl.volume", self.cfl.volume)?;
        if !(self.cfl.growth >= 1.0) {
            return Err(invalid("cfl.growth", format!("{} < 1", self.cfl.growth)));
        }
        positive("final_time", self.final_time)?;
        positive("initial_time_step", self.initial_time_step)?;
        if self.max_steps == 0 {
            return Err(invalid("max_steps", "must be at least 1".to_string()));
        }
        match self.eos {
            EosSpec::IdealGas {
                gas_constant,
                specific_heat,
            } => {
                positive("eos.gas_constant", gas_constant)?;
                positive("eos.specific_heat", specific_heat)?;
            }
        }
        if let MeshRecipe::Box {
            dimensions,
            xmin,
            xmax,
        } = &self.mesh
        {
            let d = dimensions.len();
            if !(2..=3).contains(&d) || xmin.len() != d || xmax.len() != d {
                return Err(invalid(
                    "mesh",
                    format!(
                        "box needs 2 or 3 matching extents, got {d}/{}/{}",
                        xmin.len(),
                        xmax.len()
                    ),
                ));
            }
            if dimensions.contains(&0) {
                return Err(invalid("mesh.dimensions", "zero cells along an axis".into()));
            }
            if xmin.iter().zip(xmax).any(|(lo, hi)| !(hi > lo)) {
                return Err(invalid("mesh.xmax", "must exceed xmin".into()));
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not a positive number")))
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
