mod common;

use common::*;
use metadox::{
    Error, ExtractorConfig, Heading, MetadataExtractor, TableOfContentsItem, TableTextOrder,
};

fn sample_document() -> Vec<u8> {
    let body = document_xml(&[
        heading(1, "Intro"),
        paragraph(&words(500)),
        heading(2, "Background"),
        paragraph("See Figure 1 with aws lambda"),
        heading(2, "Scope"),
        heading(1, "Design"),
        heading(3, "Detail"),
        table(&["cell one", "cell two"]),
    ]);
    let core = core_xml(
        "Platform Overview",
        "Sam Rivera",
        "Architecture notes",
        "cloud, platform",
    );

    build_container(&[
        ("[Content_Types].xml", b"<Types/>"),
        ("word/document.xml", body.as_bytes()),
        ("docProps/core.xml", core.as_bytes()),
        ("word/media/image1.png", b"\x89PNG"),
        ("word/media/arch.emf", b"emf"),
        ("word/charts/chart1.xml", b"<c:chartSpace xmlns:c=\"urn:c\"/>"),
    ])
}

#[tokio::test]
async fn test_docx_counts_and_properties() {
    let metadata = MetadataExtractor::default()
        .extract_docx_metadata(sample_document())
        .await
        .expect("sample document should extract");

    assert_eq!(metadata.word_count, 515);
    assert_eq!(metadata.page_count, 2);
    assert_eq!(metadata.image_count, 2);
    // arch.emf + chart1.xml + "Figure 1"
    assert_eq!(metadata.diagram_count, 3);

    assert_eq!(metadata.title.as_deref(), Some("Platform Overview"));
    assert_eq!(metadata.author.as_deref(), Some("Sam Rivera"));
    assert_eq!(metadata.description.as_deref(), Some("Architecture notes"));
    assert_eq!(
        metadata.keywords,
        Some(vec!["cloud".to_string(), "platform".to_string()])
    );
    assert!(!metadata.is_partial());
}

#[tokio::test]
async fn test_docx_headings_and_table_of_contents() {
    let metadata = MetadataExtractor::default()
        .extract_docx_metadata(sample_document())
        .await
        .unwrap();

    assert_eq!(
        metadata.headings,
        vec![
            Heading::new(1, "Intro", Some(1)),
            Heading::new(2, "Background", Some(2)),
            Heading::new(2, "Scope", Some(2)),
            Heading::new(1, "Design", Some(2)),
            Heading::new(3, "Detail", Some(2)),
        ]
    );

    let toc = metadata.table_of_contents();
    assert_eq!(toc.len(), 2);
    assert_eq!(toc[0].title, "Intro");
    assert_eq!(
        toc[0].children,
        vec![
            TableOfContentsItem::new("Background", Some(2)),
            TableOfContentsItem::new("Scope", Some(2)),
        ]
    );
    assert_eq!(toc[1].title, "Design");
    assert_eq!(toc[1].children, vec![TableOfContentsItem::new("Detail", Some(2))]);
}

#[tokio::test]
async fn test_table_text_is_appended_by_default() {
    let metadata = MetadataExtractor::default()
        .extract_docx_metadata(sample_document())
        .await
        .unwrap();

    let text = metadata.extracted_text.unwrap();
    assert!(text.starts_with("Intro\nlorem"));
    assert!(text.ends_with("Detail\ncell one\ncell two"));
}

#[tokio::test]
async fn test_table_text_positional_option() {
    let body = document_xml(&[
        paragraph("Before"),
        table(&["Cell"]),
        paragraph("After"),
    ]);
    let data = build_container(&[("word/document.xml", body.as_bytes())]);

    let config = ExtractorConfig {
        table_text: TableTextOrder::Positional,
        ..ExtractorConfig::default()
    };
    let metadata = MetadataExtractor::new(config)
        .extract_docx_metadata(data)
        .await
        .unwrap();

    assert_eq!(metadata.extracted_text.as_deref(), Some("Before\nCell\nAfter"));
}

#[tokio::test]
async fn test_extracted_text_is_truncated() {
    let body = document_xml(&[paragraph(&words(2000))]);
    let data = build_container(&[("word/document.xml", body.as_bytes())]);

    let metadata = MetadataExtractor::default()
        .extract_docx_metadata(data)
        .await
        .unwrap();

    assert_eq!(metadata.word_count, 2000);
    assert_eq!(metadata.page_count, 7);
    assert_eq!(metadata.extracted_text.unwrap().chars().count(), 5000);
}

#[tokio::test]
async fn test_diagram_references_are_capped() {
    let body = document_xml(&[paragraph(&"Refer to diagram 4 again. ".repeat(60))]);
    let data = build_container(&[("word/document.xml", body.as_bytes())]);

    let metadata = MetadataExtractor::default()
        .extract_docx_metadata(data)
        .await
        .unwrap();

    assert_eq!(metadata.diagram_count, 50);
}

#[tokio::test]
async fn test_non_archive_is_format_error() {
    let result = MetadataExtractor::default()
        .extract_docx_metadata(b"%PDF-1.7 this is not a zip".to_vec())
        .await;

    assert!(matches!(result, Err(Error::Format(_))));
}

#[tokio::test]
async fn test_missing_body_part_degrades() {
    let core = core_xml("Only Properties", "Kim", "", "");
    let data = build_container(&[("docProps/core.xml", core.as_bytes())]);

    let metadata = MetadataExtractor::default()
        .extract_docx_metadata(data)
        .await
        .expect("missing body must not fail");

    assert_eq!(metadata.word_count, 0);
    assert_eq!(metadata.page_count, 1);
    assert!(metadata.headings.is_empty());
    assert_eq!(metadata.extracted_text, None);
    assert_eq!(metadata.title.as_deref(), Some("Only Properties"));
    assert_eq!(metadata.description, None);
    assert_eq!(metadata.keywords, None);
}

#[tokio::test]
async fn test_malformed_body_degrades_other_passes_survive() {
    let core = core_xml("Broken Body", "Lee", "", "");
    let data = build_container(&[
        ("word/document.xml", b"<w:document xmlns:w=\"urn:w\"><w:body><w:p>"),
        ("docProps/core.xml", core.as_bytes()),
        ("word/media/image1.jpg", b"jpg"),
    ]);

    let metadata = MetadataExtractor::default()
        .extract_docx_metadata(data)
        .await
        .expect("malformed body must not fail");

    assert_eq!(metadata.word_count, 0);
    assert!(metadata.headings.is_empty());
    assert_eq!(metadata.image_count, 1);
    assert_eq!(metadata.title.as_deref(), Some("Broken Body"));
}

#[tokio::test]
async fn test_extract_dispatches_on_extension() {
    let extractor = MetadataExtractor::default();

    let metadata = extractor.extract(sample_document(), ".DOCX").await.unwrap();
    assert_eq!(metadata.word_count, 515);

    let result = extractor.extract(sample_document(), ".pptx").await;
    assert!(matches!(result, Err(Error::UnsupportedExtension(_))));

    let metadata = extractor.extract(b"plain words here".to_vec(), "txt").await.unwrap();
    assert_eq!(metadata.word_count, 3);
}

#[tokio::test]
async fn test_classification_of_extracted_text() {
    let metadata = MetadataExtractor::default()
        .extract_docx_metadata(sample_document())
        .await
        .unwrap();

    let classification = metadata.classify();
    assert_eq!(
        classification.technologies,
        vec!["AWS".to_string(), "Lambda".to_string()]
    );
    assert!(classification.compliance_frameworks.is_empty());
}
