use serde_json::json;

use crate::Input;
use crate::Module;
use crate::Output;
use crate::Position;
use crate::Provider;
use crate::Requirement;
use crate::Resource;
use crate::ResourceMode;

/// A module exercising every section, with a mix of required and optional
/// inputs, an aliased provider, and both resource modes. Declaration order
/// is deliberately unsorted so ordering tests have something to do.
pub(crate) fn sample_module() -> Module {
	Module {
		header: "Sample network module.".to_string(),
		inputs: vec![
			Input {
				name: "zone".to_string(),
				type_of: "string".to_string(),
				description: "Zone to place instances in.".to_string(),
				default: Some(json!("a")),
				position: Position {
					file: "variables.hcl".into(),
					line: 1,
				},
			},
			Input {
				name: "region".to_string(),
				type_of: "string".to_string(),
				description: "Region to deploy into.".to_string(),
				default: None,
				position: Position {
					file: "variables.hcl".into(),
					line: 7,
				},
			},
			Input {
				name: "instance_count".to_string(),
				type_of: "number".to_string(),
				description: "How many instances to start.".to_string(),
				default: Some(json!(1)),
				position: Position {
					file: "variables.hcl".into(),
					line: 13,
				},
			},
		],
		outputs: vec![
			Output {
				name: "vpc_id".to_string(),
				description: "Identifier of the created network.".to_string(),
				value_expr: "vpc.main.id".to_string(),
				sensitive: false,
				value: None,
			},
			Output {
				name: "db_password".to_string(),
				description: "Bootstrap password.".to_string(),
				value_expr: "random_password.db.result".to_string(),
				sensitive: true,
				value: None,
			},
		],
		providers: vec![
			Provider {
				name: "aws".to_string(),
				alias: None,
				version: Some(">= 2.15".to_string()),
			},
			Provider {
				name: "aws".to_string(),
				alias: Some("replica".to_string()),
				version: None,
			},
		],
		requirements: vec![
			Requirement {
				name: "core".to_string(),
				version: Some(">= 0.12".to_string()),
			},
			Requirement {
				name: "aws".to_string(),
				version: Some(">= 2.15".to_string()),
			},
		],
		resources: vec![
			Resource {
				type_of: "vpc".to_string(),
				name: "main".to_string(),
				provider: "aws".to_string(),
				mode: ResourceMode::Managed,
				position: Position {
					file: "main.hcl".into(),
					line: 3,
				},
			},
			Resource {
				type_of: "ami".to_string(),
				name: "base".to_string(),
				provider: "aws".to_string(),
				mode: ResourceMode::Data,
				position: Position {
					file: "main.hcl".into(),
					line: 21,
				},
			},
		],
	}
}

/// The sample module with resolved output values, as produced when value
/// resolution is enabled upstream.
pub(crate) fn sample_module_with_values() -> Module {
	let mut module = sample_module();
	module.outputs[0].value = Some(json!("vpc-1234"));
	module.outputs[1].value = Some(json!("hunter2"));
	module
}

/// One required input and one output, nothing else. Small enough for
/// byte-exact golden assertions.
pub(crate) fn tiny_module() -> Module {
	Module {
		header: "Tiny module.".to_string(),
		inputs: vec![Input {
			name: "region".to_string(),
			type_of: "string".to_string(),
			description: "Region to deploy into.".to_string(),
			default: None,
			position: Position::default(),
		}],
		outputs: vec![Output {
			name: "vpc_id".to_string(),
			description: "Identifier of the created network.".to_string(),
			value_expr: "vpc.main.id".to_string(),
			sensitive: false,
			value: None,
		}],
		..Module::default()
	}
}
