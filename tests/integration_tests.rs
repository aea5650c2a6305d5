use mala_direta_pcl::core::ConfigProvider;
use mala_direta_pcl::utils::error::StatusTag;
use mala_direta_pcl::{BatchFile, BatchPayload, BatchProcessor, LocalStorage, PrintConfiguration};
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

const BATCH_GUID: &str = "9b2f7c1e-0d4a-4c3b-8e5f-1a2b3c4d5e6f";

struct TestConfig {
    print: PrintConfiguration,
}

impl ConfigProvider for TestConfig {
    fn input_bucket(&self) -> &str {
        "entrada"
    }

    fn output_bucket(&self) -> &str {
        "saida"
    }

    fn print_config(&self) -> &PrintConfiguration {
        &self.print
    }
}

fn write_source(root: &Path, key: &str, content: &str) {
    let path = root.join("entrada").join(key);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn payload(files: Vec<BatchFile>, overrides: &[(&str, &str)]) -> BatchPayload {
    BatchPayload {
        batch_id: 101,
        client_id: Some("cliente-1".to_string()),
        profile_id: Some("perfil-1".to_string()),
        processing_type: Some("MalaDireta".to_string()),
        files,
        overrides: overrides
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    }
}

fn batch_file(name: &str, pages: u32) -> BatchFile {
    BatchFile {
        file_name: name.to_string(),
        storage_key: format!("lotes/{}/{}", BATCH_GUID, name),
        bucket: None,
        declared_page_count: pages,
    }
}

fn processor(root: &Path, print: PrintConfiguration) -> BatchProcessor<LocalStorage, TestConfig> {
    BatchProcessor::new(LocalStorage::new(root), TestConfig { print })
}

#[tokio::test]
async fn test_end_to_end_batch_over_local_storage() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_source(
        root,
        &format!("lotes/{}/clientes.csv", BATCH_GUID),
        "Nome,Endereco,Cidade,UF,CEP\nJoão Silva,Rua A 100,Centro,SP,01000-000\nMaria Souza,Rua B 200,Santos,SP,11000-000\n",
    );
    write_source(
        root,
        &format!("lotes/{}/fornecedores.txt", BATCH_GUID),
        "Destinatario|Bairro\tCidade|Estado\nEmpresa X|Vila Nova\tCampinas|SP\n",
    );

    let print = PrintConfiguration {
        margin_top: 15,
        margin_left: 20,
        ..Default::default()
    };
    let processor = processor(root, print);
    let payload = payload(
        vec![batch_file("clientes.csv", 2), batch_file("fornecedores.txt", 1)],
        &[],
    );

    let response = processor.handle(&payload).await;
    assert_eq!(response.status, StatusTag::Success, "{}", response.message);
    assert_eq!(response.files.len(), 2);

    let first = &response.files[0];
    assert_eq!(
        first.output_key,
        format!("processados/{}/clientes.pcl", BATCH_GUID)
    );
    assert_eq!(first.page_count, 2);

    let bytes = std::fs::read(root.join("saida").join(&first.output_key)).unwrap();
    assert_eq!(bytes.len(), first.size_bytes);
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("\x1bE\x1b&l0O\x1b&l26A\x1b&l15E\x1b&a20L"));
    assert!(text.contains("\x1b&a25V\x1b&a20HJoão Silva\n\x1b&a45VRua A 100\n"));
    assert!(text.contains("\x1b&a65VCentro - SP\n\x1b&a85VCEP: 01000-000\n"));
    // One separator between the two envelopes plus the footer's form feed.
    assert_eq!(text.matches('\x0c').count(), 2);
    assert!(text.contains("@PJL COMMENT Configuracao: A4, Janela\n"));

    let second = std::fs::read_to_string(
        root.join("saida")
            .join(format!("processados/{}/fornecedores.pcl", BATCH_GUID)),
    )
    .unwrap();
    assert!(second.contains("\x1b&a20HEmpresa X\n"));
    assert!(second.contains("Vila Nova\n"));
    assert!(second.contains("Campinas - SP\n"));
}

#[tokio::test]
async fn test_overrides_change_layout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_source(
        root,
        &format!("lotes/{}/clientes.csv", BATCH_GUID),
        "Nome,Endereco,Cidade,UF,CEP\nAna,Rua A,Santos,SP,11000-000\n",
    );

    let processor = processor(root, PrintConfiguration::default());
    let payload = payload(
        vec![batch_file("clientes.csv", 1)],
        &[("EnderecoCompleto", "false"), ("TipoEnvelope", "Comum")],
    );

    let converted = processor.process(&payload).await.unwrap();
    let text = std::fs::read_to_string(root.join("saida").join(&converted[0].output_key)).unwrap();

    assert!(!text.contains("Rua A"));
    assert!(!text.contains("\x1b&a2000V"));
    assert!(text.contains("CEP: 11000-000\n"));
    assert!(text.contains("Configuracao: A4, Comum"));
}

#[tokio::test]
async fn test_validation_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let processor = processor(temp_dir.path(), PrintConfiguration::default());

    let mut invalid = payload(Vec::new(), &[]);
    invalid.batch_id = -1;

    let response = processor.handle(&invalid).await;
    assert_eq!(response.status, StatusTag::ValidationError);
    assert!(response.message.contains("batchId"));
    assert!(response.files.is_empty());
}

#[tokio::test]
async fn test_bad_boolean_override_fails_whole_batch() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_source(
        root,
        &format!("lotes/{}/clientes.csv", BATCH_GUID),
        "Nome\nAna\n",
    );

    let processor = processor(root, PrintConfiguration::default());
    let payload = payload(vec![batch_file("clientes.csv", 1)], &[("CodigoPostal", "sim")]);

    let response = processor.handle(&payload).await;
    assert_eq!(response.status, StatusTag::Failed);
    assert!(response.message.contains("CodigoPostal"));
    assert!(!root.join("saida").exists());
}

#[tokio::test]
async fn test_batch_stops_at_first_failing_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_source(
        root,
        &format!("lotes/{}/primeiro.csv", BATCH_GUID),
        "Nome\nAna\n",
    );
    write_source(
        root,
        &format!("lotes/{}/terceiro.csv", BATCH_GUID),
        "Nome\nCarla\n",
    );

    let processor = processor(root, PrintConfiguration::default());
    let payload = payload(
        vec![
            batch_file("primeiro.csv", 1),
            batch_file("ausente.csv", 1),
            batch_file("terceiro.csv", 1),
        ],
        &[],
    );

    let response = processor.handle(&payload).await;
    assert_eq!(response.status, StatusTag::Failed);
    assert!(response.message.starts_with("ausente.csv: "));

    let out = root.join("saida").join(format!("processados/{}", BATCH_GUID));
    assert!(out.join("primeiro.pcl").exists());
    assert!(!out.join("terceiro.pcl").exists());
}

#[tokio::test]
async fn test_header_only_file_produces_header_and_footer() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_source(
        root,
        &format!("lotes/{}/vazio.csv", BATCH_GUID),
        "Nome,CEP\n",
    );

    let processor = processor(root, PrintConfiguration::default());
    let converted = processor
        .process(&payload(vec![batch_file("vazio.csv", 0)], &[]))
        .await
        .unwrap();

    assert_eq!(converted[0].page_count, 0);
    let text = std::fs::read_to_string(root.join("saida").join(&converted[0].output_key)).unwrap();
    assert!(text.starts_with("\x1bE"));
    assert!(text.ends_with('\x0c'));
    assert_eq!(text.matches('\x0c').count(), 1);
}
