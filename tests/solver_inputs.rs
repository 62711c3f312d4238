use ale_topology::inputs::{ConfigError, EosSpec, MeshRecipe, SolverInputs};
use ale_topology::prelude::*;

const SEDOV: &str = r#"{
    "prefix": "sedov",
    "postfix": "vtk",
    "output_freq": 50,
    "cfl": { "acoustic": 0.25, "volume": 0.1, "growth": 1.01 },
    "final_time": 1.0,
    "initial_time_step": 1e-6,
    "max_steps": 100000,
    "eos": { "type": "ideal_gas", "gas_constant": 1.4, "specific_heat": 1.0 },
    "mesh": { "type": "box", "dimensions": [8, 8, 8], "xmin": [0, 0, 0], "xmax": [1.2, 1.2, 1.2] }
}"#;

#[test]
fn parse_full_input() {
    let inputs = SolverInputs::from_json_str(SEDOV).unwrap();
    assert_eq!(inputs.prefix, "sedov");
    assert_eq!(inputs.output_freq, 50);
    assert_eq!(
        inputs.eos,
        EosSpec::IdealGas {
            gas_constant: 1.4,
            specific_heat: 1.0
        }
    );
    assert!(matches!(&inputs.mesh, MeshRecipe::Box { dimensions, .. } if dimensions == &[8, 8, 8]));
}

#[test]
fn mesh_config_follows_recipe_dimension() {
    let inputs = SolverInputs::from_json_str(SEDOV).unwrap();
    let dim = inputs.mesh_dimension().unwrap();
    let config = MeshConfig::new(dim).unwrap();
    assert_eq!(config, MeshConfig::three_d());
    assert!(MeshTopology::new(config).is_ok());
}

#[test]
fn unknown_field_is_rejected() {
    let text = SEDOV.replace("\"postfix\"", "\"suffix\"");
    assert!(matches!(
        SolverInputs::from_json_str(&text),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("ale_topology_missing_input.json");
    assert!(matches!(SolverInputs::load(&path), Err(ConfigError::Io(_))));
}
