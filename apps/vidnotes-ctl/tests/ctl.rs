use vidnotes_ctl::Command;
use vidnotes_service::NoteService;
use vidnotes_testkit::TestDataDir;

async fn execute(service: &NoteService, command: Command) -> color_eyre::Result<String> {
	let mut out = Vec::new();

	vidnotes_ctl::execute(service, command, &mut out).await?;

	Ok(String::from_utf8(out).expect("Output must be UTF-8."))
}

fn add(video: &str, at: u64, text: &str) -> Command {
	Command::Add {
		video: video.to_string(),
		title: "Title A".to_string(),
		at,
		text: text.to_string(),
	}
}

#[tokio::test]
async fn add_then_list_prints_time_and_link() {
	let data_dir = TestDataDir::new().expect("Failed to create test dir.");
	let service = NoteService::open(data_dir.config());
	let added = execute(&service, add("v1", 125, "hello")).await.expect("Add must succeed.");

	assert!(added.contains("at 2:05."), "Unexpected output: {added}");

	let listed = execute(&service, Command::List { query: String::new(), json: false })
		.await
		.expect("List must succeed.");

	assert!(listed.starts_with("Title A (v1)\n"), "Unexpected output: {listed}");
	assert!(listed.contains("  [2:05] hello\n"));
	assert!(listed.contains("https://www.youtube.com/watch?v=v1&t=125s"));
}

#[tokio::test]
async fn blank_text_is_rejected_before_saving() {
	let data_dir = TestDataDir::new().expect("Failed to create test dir.");
	let service = NoteService::open(data_dir.config());
	let result = execute(&service, add("v1", 0, "  ")).await;

	assert!(result.is_err());
	assert!(!data_dir.document_exists());
}

#[tokio::test]
async fn export_file_imports_back() {
	let data_dir = TestDataDir::new().expect("Failed to create test dir.");

	data_dir
		.write_raw(&vidnotes_testkit::sample_document().to_string())
		.expect("Failed to seed document.");

	let service = NoteService::open(data_dir.config());
	let export_path = data_dir.path().join("backup.json");

	execute(&service, Command::Export { out: Some(export_path.clone()) })
		.await
		.expect("Export must succeed.");
	execute(&service, Command::Clear { yes: true }).await.expect("Clear must succeed.");

	assert!(!data_dir.document_exists());

	let imported = execute(&service, Command::Import { file: export_path })
		.await
		.expect("Import must succeed.");

	assert_eq!(imported, "Imported 3 notes across 2 videos.\n");
	assert_eq!(
		data_dir.read_json().expect("Document must be JSON."),
		vidnotes_testkit::sample_document()
	);
}

#[tokio::test]
async fn clear_without_confirmation_keeps_notes() {
	let data_dir = TestDataDir::new().expect("Failed to create test dir.");

	data_dir
		.write_raw(&vidnotes_testkit::sample_document().to_string())
		.expect("Failed to seed document.");

	let service = NoteService::open(data_dir.config());

	assert!(execute(&service, Command::Clear { yes: false }).await.is_err());
	assert!(data_dir.document_exists());
}

#[tokio::test]
async fn deleting_unknown_note_reports_no_change() {
	let data_dir = TestDataDir::new().expect("Failed to create test dir.");
	let service = NoteService::open(data_dir.config());
	let output = execute(
		&service,
		Command::Delete { video: "v1".to_string(), note: "missing".to_string() },
	)
	.await
	.expect("Delete must succeed.");

	assert_eq!(output, "No note missing found; nothing changed.\n");
}
