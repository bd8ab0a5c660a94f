//! Format sniffing and hint resolution.

mod helpers;

use doctext::core::mime::{extension_of, format_from_mime};
use doctext::{FormatEvidence, FormatTag, resolve, resolve_with_evidence, sniff};
use helpers::{docx_with_body, legacy_doc_bytes, paragraph, pdf_with_pages};

#[test]
fn test_sniff_real_documents() {
    assert_eq!(sniff(&pdf_with_pages(&["x"])), FormatTag::Pdf);
    assert_eq!(sniff(&docx_with_body(&paragraph("x"))), FormatTag::Docx);
    assert_eq!(sniff(&legacy_doc_bytes()), FormatTag::LegacyDoc);
    assert_eq!(sniff(b"hello world"), FormatTag::Unknown);
    assert_eq!(sniff(b""), FormatTag::Unknown);
}

#[test]
fn test_sniff_only_depends_on_prefix() {
    let samples: [&[u8]; 4] = [b"%PDF-1.7", b"PK\x03\x04\x14\x00\x06\x00", b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1", b"plain te"];

    for sample in samples {
        let mut extended = sample.to_vec();
        extended.extend_from_slice(b"%PDF PK\x03\x04 trailing noise that must not matter");
        assert_eq!(sniff(sample), sniff(&extended));
    }
}

#[test]
fn test_signature_overrides_every_hint() {
    let pdf = pdf_with_pages(&["x"]);
    for (name, mime) in [
        (Some("a.docx"), Some("application/msword")),
        (Some("a.txt"), None),
        (None, Some("text/plain")),
    ] {
        assert_eq!(
            resolve_with_evidence(&pdf, name, mime),
            (FormatTag::Pdf, FormatEvidence::Signature)
        );
    }
}

#[test]
fn test_extension_beats_mime() {
    assert_eq!(
        resolve_with_evidence(b"words", Some("notes.txt"), Some("application/pdf")),
        (FormatTag::PlainText, FormatEvidence::Extension)
    );
}

#[test]
fn test_mime_used_last() {
    assert_eq!(
        resolve_with_evidence(b"words", Some("download"), Some("Text/Plain; charset=ISO-8859-1")),
        (FormatTag::PlainText, FormatEvidence::MimeType)
    );
    assert_eq!(resolve(b"words", None, Some("application/msword")), FormatTag::LegacyDoc);
}

#[test]
fn test_unknown_when_nothing_matches() {
    assert_eq!(
        resolve_with_evidence(b"words", Some("archive.tar.gz"), Some("application/octet-stream")),
        (FormatTag::Unknown, FormatEvidence::None)
    );
}

#[test]
fn test_extension_from_urls() {
    assert_eq!(
        extension_of("https://cdn.example.com/files/Resume.PDF?X-Amz-Signature=abc#page=2").as_deref(),
        Some(".pdf")
    );
    assert_eq!(extension_of("https://example.com/download").as_deref(), None);
    assert_eq!(extension_of(".bashrc"), None);
    assert_eq!(extension_of("C:\\docs\\offer.docx").as_deref(), Some(".docx"));
}

#[test]
fn test_mime_parameters_ignored() {
    assert_eq!(format_from_mime("application/pdf; name=x.pdf"), Some(FormatTag::Pdf));
    assert_eq!(format_from_mime("  APPLICATION/PDF  "), Some(FormatTag::Pdf));
    assert_eq!(format_from_mime("application/octet-stream"), None);
}
