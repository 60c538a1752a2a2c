#[cfg(test)]
mod matrix_proptests {
    use proptest::prelude::*;
    use qrcode::QrCode;

    use barqr::{ErrorCorrection, MatrixEncodeRequest};

    pub fn ec_strategy() -> BoxedStrategy<ErrorCorrection> {
        prop_oneof![
            Just(ErrorCorrection::L),
            Just(ErrorCorrection::M),
            Just(ErrorCorrection::Q),
            Just(ErrorCorrection::H)
        ]
        .boxed()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_dimensions(data in "[ -~]{1,200}", ecl in ec_strategy(), box_size in 1u32..=20, border in 0u32..=10) {
            let mut req = MatrixEncodeRequest::new(data.as_str());
            req.error_correction(ecl).box_size(box_size).border(border);
            let img = image::load_from_memory(&req.encode().unwrap()).unwrap();

            let w = QrCode::with_error_correction_level(data.as_bytes(), ecl.ec_level()).unwrap().width() as u32;
            let side = (w + 2 * border) * box_size;
            prop_assert_eq!((img.width(), img.height()), (side, side));
        }
    }
}

#[cfg(test)]
mod matrix_tests {
    use qrcode::QrCode;
    use test_case::test_case;

    use barqr::{encode_matrix, EncodingError, ErrorCorrection, MatrixEncodeRequest};

    fn dimensions(req: &MatrixEncodeRequest) -> (u32, u32) {
        let img = image::load_from_memory(&encode_matrix(req).unwrap()).unwrap();
        (img.width(), img.height())
    }

    #[test]
    fn test_example_url() {
        let mut req = MatrixEncodeRequest::new("https://example.com");
        req.error_correction(ErrorCorrection::M).box_size(10).border(4).colors("#000000", "#FFFFFF");

        let module_count = QrCode::with_error_correction_level("https://example.com", qrcode::EcLevel::M)
            .unwrap()
            .width() as u32;
        let side = (module_count + 2 * 4) * 10;
        assert_eq!(dimensions(&req), (side, side));
    }

    #[test_case("1".repeat(4000); "numeric")]
    #[test_case("HELLO WORLD ".repeat(300); "alphanumeric")]
    #[test_case("x".repeat(2900); "bytes")]
    fn test_large_content_at_low(data: String) {
        let mut req = MatrixEncodeRequest::new(data);
        req.error_correction(ErrorCorrection::L).box_size(1).border(0);
        assert!(!encode_matrix(&req).unwrap().is_empty());
    }

    #[test]
    fn test_overflow_at_high() {
        let mut req = MatrixEncodeRequest::new("1234567890".repeat(306));
        req.error_correction(ErrorCorrection::H);
        let err = encode_matrix(&req).unwrap_err();
        assert!(matches!(err, EncodingError::DataTooLong('H')));
        assert_eq!(err.to_string(), "data too long for a QR code at error correction level H");
    }

    #[test]
    fn test_bounds_and_monotonic_scaling() {
        let mut req = MatrixEncodeRequest::new("bounds");
        let smallest = dimensions(req.box_size(1).border(0));
        let bigger_box = dimensions(req.box_size(2).border(0));
        let bigger_border = dimensions(req.box_size(1).border(1));
        let largest = dimensions(req.box_size(20).border(10));

        assert!(smallest.0 < bigger_box.0);
        assert!(smallest.0 < bigger_border.0);
        assert!(bigger_box.0 < largest.0 && bigger_border.0 < largest.0);
        assert_eq!(largest.0, largest.1);
    }

    #[test]
    fn test_higher_level_never_shrinks() {
        let data = "The quick brown fox jumps over the lazy dog";
        let sides: Vec<u32> = ErrorCorrection::ALL
            .into_iter()
            .map(|ecl| {
                let mut req = MatrixEncodeRequest::new(data);
                req.error_correction(ecl).box_size(1).border(0);
                dimensions(&req).0
            })
            .collect();
        assert!(sides.windows(2).all(|w| w[0] <= w[1]), "{sides:?}");
    }

    #[test]
    fn test_idempotent() {
        let mut req = MatrixEncodeRequest::new("same input, same bytes");
        req.colors("#336699", "#FAFAFA").error_correction(ErrorCorrection::Q);
        assert_eq!(encode_matrix(&req).unwrap(), encode_matrix(&req).unwrap());
    }

    #[test]
    fn test_invalid_color() {
        let mut req = MatrixEncodeRequest::new("color");
        req.colors("#000000", "#12");
        assert!(matches!(encode_matrix(&req).unwrap_err(), EncodingError::InvalidColor(_)));
    }
}
