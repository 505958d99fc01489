mod common;

use std::fs;

use common::{create_test_generator, write_template};
use stencil_core::{
    loader::bundled_template_dir, GenerateCommand, PromptGenerator, PromptRegistry, Role,
    StencilError, TemplateId, TemplateLoader, SYMFONY_COMMAND,
};

const SCENARIO_TEMPLATE: &str = "Command Name: {command_name}\nDescription: {description}";

#[test]
fn test_import_users_scenario() {
    let (_temp_dir, generator) = create_test_generator("unused", SCENARIO_TEMPLATE);

    let messages = generator
        .generate_from("app:import-users", "Import users from CSV file", true)
        .expect("Failed to generate prompt");

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(
        messages[0].content,
        "Command Name: app:import-users\nDescription: Import users from CSV file"
    );
}

#[test]
fn test_empty_parameters_are_invalid() {
    let (_temp_dir, generator) = create_test_generator(SCENARIO_TEMPLATE, SCENARIO_TEMPLATE);

    for (command_name, description) in [("", "x"), ("x", ""), ("", "")] {
        let result = generator.generate_from(command_name, description, false);
        assert!(
            matches!(result, Err(StencilError::InvalidParameter { .. })),
            "expected InvalidParameter for ({command_name:?}, {description:?})"
        );
    }

    assert!(generator.generate_from("x", "y", false).is_ok());
}

#[test]
fn test_template_selection_follows_interactive_flag() {
    let (_temp_dir, generator) =
        create_test_generator("basic: {command_name}", "interactive: {command_name}");

    let basic = generator.generate_from("app:x", "d", false).unwrap();
    let interactive = generator.generate_from("app:x", "d", true).unwrap();

    assert_eq!(basic[0].content, "basic: app:x");
    assert_eq!(interactive[0].content, "interactive: app:x");
    assert_ne!(basic, interactive);
}

#[test]
fn test_no_placeholder_survives_substitution() {
    let template = "{command_name}{description}\n{command_name} -> {description}\n{description}";
    let (_temp_dir, generator) = create_test_generator(template, template);

    let content = &generator.generate_from("app:sync", "Sync", false).unwrap()[0].content;
    assert!(!content.contains("{command_name}"));
    assert!(!content.contains("{description}"));
    assert_eq!(content, "app:syncSync\napp:sync -> Sync\nSync");
}

#[test]
fn test_placeholder_shaped_values_stay_literal() {
    let (_temp_dir, generator) = create_test_generator(SCENARIO_TEMPLATE, SCENARIO_TEMPLATE);

    let messages = generator
        .generate_from("app:x", "{command_name}", false)
        .unwrap();
    assert_eq!(
        messages[0].content,
        "Command Name: app:x\nDescription: {command_name}"
    );
}

#[test]
fn test_missing_template_is_not_found() {
    let (temp_dir, generator) = create_test_generator(SCENARIO_TEMPLATE, SCENARIO_TEMPLATE);
    fs::remove_file(temp_dir.path().join(TemplateId::Interactive.file_name())).unwrap();

    let err = generator.generate_from("app:x", "d", true).unwrap_err();
    assert!(matches!(
        err,
        StencilError::TemplateNotFound {
            id: TemplateId::Interactive,
            ..
        }
    ));

    // The basic template is unaffected
    assert!(generator.generate_from("app:x", "d", false).is_ok());
}

#[test]
fn test_repeated_calls_are_identical() {
    let (_temp_dir, generator) = create_test_generator(SCENARIO_TEMPLATE, SCENARIO_TEMPLATE);
    let params = GenerateCommand::new("app:report", "Send the weekly report", false);

    let first = generator.generate(&params).unwrap();
    let second = generator.generate(&params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_templates_are_read_on_every_call() {
    let (temp_dir, generator) = create_test_generator("v1 {command_name}", "");

    let before = generator.generate_from("app:x", "d", false).unwrap();
    write_template(&temp_dir, TemplateId::Basic, "v2 {command_name}");
    let after = generator.generate_from("app:x", "d", false).unwrap();

    assert_eq!(before[0].content, "v1 app:x");
    assert_eq!(after[0].content, "v2 app:x");
}

#[test]
fn test_bundled_templates_generate_through_registry() {
    let generator = PromptGenerator::new(TemplateLoader::new(bundled_template_dir()));
    let registry = PromptRegistry::with_builtin_prompts();

    for interactive in [false, true] {
        let args = serde_json::json!({
            "command_name": "app:import-users",
            "description": "Import users from CSV file",
            "interactive": interactive.to_string(),
        });
        let messages = registry
            .invoke(SYMFONY_COMMAND, &generator, args.as_object().unwrap())
            .expect("Failed to invoke prompt");

        assert_eq!(messages.len(), 1);
        let content = &messages[0].content;
        assert!(content.contains("Command Name: app:import-users"));
        assert!(content.contains("Description: Import users from CSV file"));
        assert!(!content.contains("{command_name}"));
        assert!(!content.contains("{description}"));
        assert_eq!(content.contains("interact()"), interactive);
    }
}
