use crate::core::pcl::{self, Axis};
use crate::domain::model::PrintConfiguration;
use chrono::{DateTime, Utc};

/// Address window position on a windowed envelope.
pub const WINDOW_VERTICAL: u32 = 2000;
pub const WINDOW_HORIZONTAL: u32 = 1200;

/// Vertical position of the logo reference in the footer.
pub const LOGO_VERTICAL: u32 = 8000;

/// Paper geometry, margins and font; plus the window anchor for `Janela` envelopes.
///
/// The page is always A4 portrait, whatever `paper_format` says.
pub fn generate_header(config: &PrintConfiguration) -> Vec<u8> {
    let mut header = String::new();
    header.push_str(pcl::reset());
    header.push_str(pcl::set_orientation_portrait());
    header.push_str(pcl::set_page_size_a4());
    header.push_str(&pcl::set_margins(config.margin_top, config.margin_left));
    header.push_str(pcl::set_font());

    if config.is_windowed_envelope() {
        header.push_str(&pcl::move_cursor(Axis::Vertical, WINDOW_VERTICAL));
        header.push_str(&pcl::move_cursor(Axis::Horizontal, WINDOW_HORIZONTAL));
    }

    config.encoding.encode(&header)
}

pub fn generate_footer(config: &PrintConfiguration) -> Vec<u8> {
    generate_footer_at(config, Utc::now())
}

/// Footer stamped with an explicit processing time.
///
/// The logo is only referenced by name, no image data is embedded.
pub fn generate_footer_at(config: &PrintConfiguration, processed_at: DateTime<Utc>) -> Vec<u8> {
    let mut footer = String::new();

    if let Some(logo) = config.logo() {
        footer.push_str(&pcl::move_cursor(Axis::Vertical, LOGO_VERTICAL));
        footer.push_str(&pcl::comment(&format!("Logotipo: {}", logo)));
    }

    footer.push_str(&pcl::comment(&format!(
        "Processado em: {} UTC",
        processed_at.format("%Y-%m-%d %H:%M:%S")
    )));
    footer.push_str(&pcl::comment(&format!(
        "Configuracao: {}, {}",
        config.paper_format, config.envelope_type
    )));
    footer.push_str(pcl::form_feed());

    config.encoding.encode(&footer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_header_for_windowed_envelope() {
        let config = PrintConfiguration {
            margin_top: 15,
            margin_left: 20,
            ..Default::default()
        };
        let header = generate_header(&config);

        let expected = b"\x1bE\x1b&l0O\x1b&l26A\x1b&l15E\x1b&a20L\x1b(s10V\x1b(s0S\x1b(s0B\x1b&a2000V\x1b&a1200H";
        assert_eq!(header, expected.to_vec());
    }

    #[test]
    fn test_header_without_window_placement() {
        for envelope in ["Comum", "janela", ""] {
            let config = PrintConfiguration {
                envelope_type: envelope.to_string(),
                ..Default::default()
            };
            let header = generate_header(&config);
            assert!(!contains(&header, b"\x1b&a2000V"), "envelope {:?}", envelope);
            assert!(header.ends_with(b"\x1b(s0B"));
        }
    }

    #[test]
    fn test_header_ignores_paper_format() {
        let config = PrintConfiguration {
            paper_format: "Carta".to_string(),
            ..Default::default()
        };
        assert!(contains(&generate_header(&config), b"\x1b&l26A"));
    }

    #[test]
    fn test_footer_without_logo() {
        let config = PrintConfiguration::default();
        let at = Utc.with_ymd_and_hms(2026, 3, 5, 14, 7, 9).unwrap();
        let footer = generate_footer_at(&config, at);

        let expected = "@PJL COMMENT Processado em: 2026-03-05 14:07:09 UTC\n\
                        @PJL COMMENT Configuracao: A4, Janela\n\x0c";
        assert_eq!(String::from_utf8(footer).unwrap(), expected);
    }

    #[test]
    fn test_footer_with_logo() {
        let config = PrintConfiguration {
            company_logo: Some("logos/acme.png".to_string()),
            ..Default::default()
        };
        let footer = generate_footer(&config);

        assert!(footer.starts_with(b"\x1b&a8000V@PJL COMMENT Logotipo: logos/acme.png\n"));
        assert!(contains(&footer, b"Processado em: "));
        assert!(contains(&footer, b"Configuracao: A4, Janela"));
        assert_eq!(footer.last(), Some(&0x0c));
    }
}
