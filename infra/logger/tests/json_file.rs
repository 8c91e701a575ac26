use mshop_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;

#[test]
fn json_file_output_records_structured_fields() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("mshop-json")
        .console(false)
        .json(true)
        .path(&log_dir)
        .level(LevelFilter::DEBUG)
        .init()?;
    assert!(logger.guard().is_some());

    tracing::debug!(code = "color", "attribute copied");
    tracing::trace!("below the configured level");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(log_file)?;
    let line = content.lines().next().expect("one log line");
    let record: serde_json::Value = serde_json::from_str(line)?;

    assert_eq!(record["fields"]["code"], "color");
    assert_eq!(record["fields"]["message"], "attribute copied");
    assert!(!content.contains("below the configured level"));

    Ok(())
}
