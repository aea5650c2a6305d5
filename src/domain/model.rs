use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Envelope type tag that enables the fixed window placement in the header.
pub const WINDOWED_ENVELOPE: &str = "Janela";

/// One data line of a delimited file, keyed by the header row.
///
/// Names and values are stored trimmed; lookups ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimitedRecord {
    fields: Vec<(String, String)>,
}

impl DelimitedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs header names with values by position, keeping only the overlap.
    pub fn from_pairs<H, V>(headers: &[H], values: &[V]) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = Self::new();
        for (name, value) in headers.iter().zip(values) {
            record.insert(name.as_ref(), value.as_ref());
        }
        record
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        let name = name.trim();
        let value = value.trim().to_string();
        match self
            .fields
            .iter_mut()
            .find(|(existing, _)| existing.to_lowercase() == name.to_lowercase())
        {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let wanted = name.trim().to_lowercase();
        self.fields
            .iter()
            .find(|(existing, _)| existing.to_lowercase() == wanted)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for DelimitedRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name.as_ref(), value.as_ref());
        }
        record
    }
}

/// How text (field values, logo path) is turned into output bytes.
///
/// Control sequences are pure ASCII and come out identical in every mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
    /// Non-ASCII characters become `?`; the byte output of the legacy converter.
    Ascii,
}

impl TextEncoding {
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
            TextEncoding::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
        }
    }
}

/// Layout parameters fixed for the whole run.
///
/// Margins are in PCL decipoints. `paper_format` and `envelope_type` are free
/// tags, compared literally and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfiguration {
    #[serde(alias = "FormatoImpressao", alias = "formato_impressao")]
    pub paper_format: String,
    #[serde(alias = "TipoEnvelope", alias = "tipo_envelope")]
    pub envelope_type: String,
    #[serde(alias = "EnderecoCompleto", alias = "endereco_completo")]
    pub include_full_address: bool,
    #[serde(alias = "CodigoPostal", alias = "codigo_postal")]
    pub include_postal_code: bool,
    #[serde(alias = "MargemSuperior", alias = "margem_superior")]
    pub margin_top: u32,
    #[serde(alias = "MargemEsquerda", alias = "margem_esquerda")]
    pub margin_left: u32,
    #[serde(alias = "MargemInferior", alias = "margem_inferior")]
    pub margin_bottom: u32,
    #[serde(alias = "MargemDireita", alias = "margem_direita")]
    pub margin_right: u32,
    #[serde(alias = "LogotipoEmpresa", alias = "logotipo_empresa")]
    pub company_logo: Option<String>,
    pub encoding: TextEncoding,
}

impl Default for PrintConfiguration {
    fn default() -> Self {
        Self {
            paper_format: "A4".to_string(),
            envelope_type: WINDOWED_ENVELOPE.to_string(),
            include_full_address: true,
            include_postal_code: true,
            margin_top: 10,
            margin_left: 10,
            margin_bottom: 10,
            margin_right: 10,
            company_logo: None,
            encoding: TextEncoding::Utf8,
        }
    }
}

impl PrintConfiguration {
    pub fn is_windowed_envelope(&self) -> bool {
        self.envelope_type == WINDOWED_ENVELOPE
    }

    /// Logo reference, if one is configured and not blank.
    pub fn logo(&self) -> Option<&str> {
        self.company_logo.as_deref().filter(|logo| !logo.is_empty())
    }
}

/// Where a source file lives; names things only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub file_name: String,
    pub bucket: String,
    pub key: String,
}

/// Final PCL payload: header, body and footer bytes back to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedDocument {
    bytes: Vec<u8>,
}

impl GeneratedDocument {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub record_count: usize,
    pub document: GeneratedDocument,
}

/// Where an object ended up after a `store` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedFile {
    pub file_name: String,
    pub output_bucket: String,
    pub output_key: String,
    pub location: String,
    pub size_bytes: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchFile {
    #[serde(alias = "nomeArquivo")]
    pub file_name: String,
    #[serde(alias = "caminhoS3", alias = "key")]
    pub storage_key: String,
    /// Falls back to the configured input bucket.
    #[serde(alias = "bucketS3")]
    pub bucket: Option<String>,
    #[serde(alias = "quantidadePaginas")]
    pub declared_page_count: u32,
}

/// Batch request as delivered to the handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchPayload {
    #[serde(alias = "loteId")]
    pub batch_id: i64,
    #[serde(alias = "clienteId")]
    pub client_id: Option<String>,
    #[serde(alias = "perfilId")]
    pub profile_id: Option<String>,
    #[serde(alias = "tipoProcessamento")]
    pub processing_type: Option<String>,
    #[serde(alias = "arquivos")]
    pub files: Vec<BatchFile>,
    #[serde(alias = "configuracoes")]
    pub overrides: HashMap<String, String>,
}
