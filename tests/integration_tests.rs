use anyhow::Result;
use bingo_cardgen::core::collector::GenerationConfig;
use bingo_cardgen::{
    CardCollection, CardGenError, CardPipeline, CardSignature, GeneratorEngine, LocalStorage,
    TomlConfig,
};
use std::collections::HashSet;
use tempfile::TempDir;

fn toml_for(output_path: &str, extra: &str) -> String {
    format!(
        r#"
[generation]
count = 40
user_id = "integration-user"
seed = 7
{}

[output]
path = "{}"
filename = "cards.json"
"#,
        extra,
        output_path.replace('\\', "/")
    )
}

#[tokio::test]
async fn test_end_to_end_writes_cards_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("public");
    let config = TomlConfig::from_toml_str(&toml_for(output_path.to_str().unwrap(), ""))?;

    let storage = LocalStorage::new(&output_path);
    let pipeline = CardPipeline::new(storage, config);
    let summary = GeneratorEngine::new(pipeline).run().await?;

    assert_eq!(summary.card_count, 40);
    let file_path = output_path.join("cards.json");
    assert_eq!(summary.output_location, file_path.display().to_string());

    let text = std::fs::read_to_string(&file_path)?;
    assert!(text.starts_with("{\n  \"cards\": ["));

    let document: serde_json::Value = serde_json::from_str(&text)?;
    let root = document.as_object().unwrap();
    assert_eq!(root.len(), 1);

    let cards = root["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 40);
    for (index, card) in cards.iter().enumerate() {
        let fields = card.as_object().unwrap();
        assert_eq!(fields.len(), 27);
        for letter in ["b", "i", "n", "g", "o"] {
            for row in 1..=5 {
                assert!(fields[&format!("{}{}", letter, row)].is_u64());
            }
        }
        assert_eq!(fields["n3"], 0);
        assert_eq!(fields["userId"], "integration-user");
        assert_eq!(fields["cardId"], (index + 1).to_string());
    }

    let collection: CardCollection = serde_json::from_str(&text)?;
    let signatures: HashSet<CardSignature> =
        collection.cards.iter().map(|card| card.signature()).collect();
    assert_eq!(signatures.len(), 40);

    Ok(())
}

#[tokio::test]
async fn test_seeded_runs_produce_identical_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut outputs = Vec::new();

    for run in ["first", "second"] {
        let output_path = temp_dir.path().join(run);
        let config = TomlConfig::from_toml_str(&toml_for(output_path.to_str().unwrap(), ""))?;
        let pipeline = CardPipeline::new(LocalStorage::new(&output_path), config);
        GeneratorEngine::new(pipeline).run().await?;
        outputs.push(std::fs::read(output_path.join("cards.json"))?);
    }

    assert_eq!(outputs[0], outputs[1]);
    Ok(())
}

#[tokio::test]
async fn test_write_failure_surfaces_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"occupied")?;

    let config = TomlConfig::from_toml_str(&toml_for(blocker.to_str().unwrap(), ""))?;
    let pipeline = CardPipeline::new(LocalStorage::new(&blocker), config);
    let err = GeneratorEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, CardGenError::IoError(_)));
    Ok(())
}

#[tokio::test]
async fn test_attempt_ceiling_reports_unreachable_target() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("public");
    // 40 張卡不可能在 10 次內完成
    let config = TomlConfig::from_toml_str(&toml_for(
        output_path.to_str().unwrap(),
        "max_attempts = 10",
    ))?;

    let pipeline = CardPipeline::new(LocalStorage::new(&output_path), config);
    let err = GeneratorEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(
        err,
        CardGenError::TargetUnreachable {
            requested: 40,
            generated: 10,
            attempts: 10
        }
    ));
    assert!(!output_path.join("cards.json").exists());
    Ok(())
}

#[test]
fn test_generation_config_from_toml_provider() -> Result<()> {
    let config = TomlConfig::from_toml_str(&toml_for("./public", "max_attempts = 99"))?;
    let generation = GenerationConfig::from_provider(&config);

    assert_eq!(generation.card_count, 40);
    assert_eq!(generation.user_id, "integration-user");
    assert_eq!(generation.seed, Some(7));
    assert_eq!(generation.max_attempts, Some(99));
    Ok(())
}
