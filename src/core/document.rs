use crate::core::layout::generate_pages;
use crate::core::sections::{generate_footer_at, generate_header};
use crate::domain::model::{DelimitedRecord, GeneratedDocument, PrintConfiguration};
use chrono::{DateTime, Utc};

/// MIME type of every artifact written back to storage.
pub const PCL_CONTENT_TYPE: &str = "application/vnd.hp-pcl";

pub fn assemble(header: &[u8], body: &[u8], footer: &[u8]) -> GeneratedDocument {
    let mut bytes = Vec::with_capacity(header.len() + body.len() + footer.len());
    bytes.extend_from_slice(header);
    bytes.extend_from_slice(body);
    bytes.extend_from_slice(footer);
    GeneratedDocument::from_bytes(bytes)
}

pub fn render_document(
    records: &[DelimitedRecord],
    config: &PrintConfiguration,
    processed_at: DateTime<Utc>,
) -> GeneratedDocument {
    let header = generate_header(config);
    let body = generate_pages(records, config);
    let footer = generate_footer_at(config, processed_at);

    tracing::debug!(
        "Document sections: header={}B body={}B footer={}B",
        header.len(),
        body.len(),
        footer.len()
    );

    assemble(&header, &body, &footer)
}
