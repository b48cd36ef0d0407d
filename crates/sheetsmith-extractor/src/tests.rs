//! Integration tests for the conversion pipeline

#[cfg(test)]
mod tests {
    use crate::{ExtractorConfig, ExtractorError, TableExtractor, EXTRACTION_INSTRUCTIONS};
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use sheetsmith_domain::{UploadedDocument, Variant};
    use sheetsmith_llm::MockProvider;
    use std::io::Cursor;
    use std::time::Duration;

    const ROUND_TRIP_REPLY: &str =
        r#"{"best_effort": [[["A", "B"], ["1", "2"]]], "raw_data": [], "structured_view": []}"#;

    fn pdf() -> UploadedDocument {
        UploadedDocument::pdf(b"%PDF-1.7\n...".to_vec()).with_file_name("invoice.pdf")
    }

    #[tokio::test]
    async fn test_full_conversion_flow() {
        let llm = MockProvider::new(ROUND_TRIP_REPLY);
        let extractor = TableExtractor::new(llm.clone(), ExtractorConfig::default());

        let conversion = extractor.convert(&pdf()).await.unwrap();

        assert_eq!(llm.call_count(), 1);
        assert_eq!(conversion.file_name, "invoice.xlsx");
        assert_eq!(conversion.metadata.sheet_count, 1);
        assert_eq!(conversion.metadata.table_count, 1);
        assert_eq!(conversion.metadata.model_name, "mock");

        let mut xlsx: Xlsx<_> = open_workbook_from_rs(Cursor::new(conversion.bytes)).unwrap();
        assert_eq!(xlsx.sheet_names(), vec!["Best Effort".to_string()]);

        let range = xlsx.worksheet_range("Best Effort").unwrap();
        assert_eq!(range.height(), 2);
        assert_eq!(range.get_value((0, 1)), Some(&Data::String("B".to_string())));
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("1".to_string())));
    }

    #[tokio::test]
    async fn test_request_carries_document_and_schema() {
        let llm = MockProvider::new("{}");
        let extractor = TableExtractor::new(llm.clone(), ExtractorConfig::default());

        extractor.extract(&pdf()).await.unwrap();

        let request = llm.last_request().unwrap();
        assert_eq!(request.document, b"%PDF-1.7\n...".to_vec());
        assert_eq!(request.media_type, "application/pdf");
        assert_eq!(request.prompt, EXTRACTION_INSTRUCTIONS);
        let schema: serde_json::Value = serde_json::from_str(&request.response_schema).unwrap();
        assert_eq!(schema["type"], "OBJECT");
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_call() {
        let llm = MockProvider::unconfigured();
        let extractor = TableExtractor::new(llm.clone(), ExtractorConfig::default());

        let result = extractor.convert(&pdf()).await;

        assert!(matches!(result, Err(ExtractorError::MissingCredential)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_oversize_document_makes_no_call() {
        let llm = MockProvider::new(ROUND_TRIP_REPLY);
        let mut config = ExtractorConfig::default();
        config.max_document_bytes = 8;
        let extractor = TableExtractor::new(llm.clone(), config);

        let document = UploadedDocument::pdf(vec![0u8; 9]);
        let result = extractor.convert(&document).await;

        assert!(matches!(result, Err(ExtractorError::DocumentTooLarge(9, 8))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_document_makes_no_call() {
        let llm = MockProvider::default();
        let extractor = TableExtractor::new(llm.clone(), ExtractorConfig::default());

        let result = extractor.extract(&UploadedDocument::pdf(vec![])).await;

        assert!(matches!(result, Err(ExtractorError::EmptyDocument)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_config_makes_no_call() {
        let llm = MockProvider::new(ROUND_TRIP_REPLY);
        let mut config = ExtractorConfig::default();
        config.ai_timeout_secs = Some(0);
        let extractor = TableExtractor::new(llm.clone(), config);

        let result = extractor.convert(&pdf()).await;

        match result {
            Err(ExtractorError::Config(msg)) => assert!(msg.contains("ai_timeout_secs")),
            other => panic!("Expected Config error, got {:?}", other.map(|c| c.file_name)),
        }
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_exceeded_is_timeout() {
        let llm = MockProvider::new(ROUND_TRIP_REPLY).with_delay(Duration::from_secs(30));
        let config = ExtractorConfig::default().with_timeout(Some(Duration::from_secs(1)));
        let extractor = TableExtractor::new(llm.clone(), config);

        let result = extractor.convert(&pdf()).await;

        match result {
            Err(ExtractorError::Timeout(deadline)) => {
                assert_eq!(deadline, Duration::from_secs(1));
            }
            other => panic!("Expected Timeout, got {:?}", other.map(|c| c.file_name)),
        }
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unbounded_deadline_waits_for_reply() {
        let llm = MockProvider::new(ROUND_TRIP_REPLY).with_delay(Duration::from_millis(50));
        let extractor = TableExtractor::new(llm, ExtractorConfig::development());

        let conversion = extractor.convert(&pdf()).await.unwrap();
        assert_eq!(conversion.metadata.sheet_count, 1);
    }

    #[tokio::test]
    async fn test_provider_error_is_llm_error() {
        let llm = MockProvider::failing("HTTP 500: backend unavailable");
        let extractor = TableExtractor::new(llm.clone(), ExtractorConfig::default());

        let result = extractor.convert(&pdf()).await;

        match result {
            Err(ExtractorError::Llm(msg)) => assert!(msg.contains("backend unavailable")),
            other => panic!("Expected Llm error, got {:?}", other.map(|c| c.file_name)),
        }
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_invalid_format() {
        let llm = MockProvider::new("I could not find any tables, sorry!");
        let extractor = TableExtractor::new(llm, ExtractorConfig::default());

        let result = extractor.convert(&pdf()).await;
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[tokio::test]
    async fn test_empty_reply_yields_placeholder_workbook() {
        let llm = MockProvider::new("");
        let extractor = TableExtractor::new(llm, ExtractorConfig::default());

        let conversion = extractor.convert(&pdf()).await.unwrap();
        assert!(conversion.workbook.is_empty());
        assert_eq!(conversion.metadata.sheet_count, 0);

        let xlsx: Xlsx<_> = open_workbook_from_rs(Cursor::new(conversion.bytes)).unwrap();
        assert_eq!(xlsx.sheet_names(), vec![crate::EMPTY_SHEET_NAME.to_string()]);
    }

    #[tokio::test]
    async fn test_all_variants_in_fixed_order() {
        let llm = MockProvider::new(
            r#"{
                "raw_data": [[["r1"]], [["r2"]]],
                "structured_view": [[["s"]]],
                "best_effort": [[["b"]]]
            }"#,
        );
        let extractor = TableExtractor::new(llm, ExtractorConfig::default());

        let conversion = extractor.convert(&pdf()).await.unwrap();

        let order: Vec<_> = conversion.workbook.sheets().iter().map(|s| s.variant).collect();
        assert_eq!(
            order,
            vec![Variant::BestEffort, Variant::StructuredView, Variant::RawData]
        );

        let raw = conversion.workbook.sheet(Variant::RawData).unwrap();
        assert_eq!(raw.rows.len(), 3);
        assert!(raw.rows[1].is_empty());

        let xlsx: Xlsx<_> = open_workbook_from_rs(Cursor::new(conversion.bytes)).unwrap();
        assert_eq!(
            xlsx.sheet_names(),
            vec![
                "Best Effort".to_string(),
                "Structured View".to_string(),
                "Raw Data".to_string()
            ]
        );
    }

    #[test]
    fn test_extractor_is_cloneable_and_shares_provider() {
        let llm = MockProvider::default();
        let extractor = TableExtractor::new(llm.clone(), ExtractorConfig::development());
        let copy = extractor.clone();

        tokio_test::block_on(copy.extract(&pdf())).unwrap();
        assert_eq!(extractor.provider().call_count(), 1);
        assert_eq!(copy.config().ai_timeout(), None);
    }
}
