use std::fs;

use stencil_core::{PromptGenerator, TemplateId, TemplateLoader};
use tempfile::TempDir;

/// Helper function to create a generator over a temporary template store
pub fn create_test_generator(basic: &str, interactive: &str) -> (TempDir, PromptGenerator) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_template(&temp_dir, TemplateId::Basic, basic);
    write_template(&temp_dir, TemplateId::Interactive, interactive);
    let generator = PromptGenerator::new(TemplateLoader::new(temp_dir.path()));
    (temp_dir, generator)
}

/// Helper function to (re)write one template in the store
pub fn write_template(temp_dir: &TempDir, id: TemplateId, content: &str) {
    fs::write(temp_dir.path().join(id.file_name()), content).expect("Failed to write template");
}
