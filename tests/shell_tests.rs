#[cfg(test)]
mod shell_tests {
    use test_case::test_case;

    use barqr::shell::{LINEAR_HINT, LINEAR_WARNING, MATRIX_CAPTION, MATRIX_FILE_NAME, MATRIX_WARNING};
    use barqr::{present, Form, LinearStyle, MatrixStyle, Presentation, Symbology};

    #[test_case(Form::linear("", Symbology::Code128, LinearStyle::default()), LINEAR_WARNING; "linear")]
    #[test_case(Form::matrix("", MatrixStyle::default()), MATRIX_WARNING; "matrix")]
    fn test_empty_content(form: Form, exp: &'static str) {
        assert_eq!(present(&form), Presentation::Warning(exp));
    }

    #[test]
    fn test_linear_image() {
        let form = Form::linear("123456789012", Symbology::Ean13, LinearStyle::default());
        let Presentation::Image { caption, download } = present(&form) else {
            panic!("expected an image");
        };
        assert_eq!(caption, "Type: ean13 | Data: 123456789012");
        assert_eq!(download.file_name, "barcode_ean13_1234567890.png");
        assert_eq!(download.mime, "image/png");
        assert!(image::load_from_memory(&download.bytes).is_ok());
    }

    #[test]
    fn test_linear_error() {
        let form = Form::linear("12", Symbology::Ean13, LinearStyle::default());
        let Presentation::Error { alert, hint, input_error } = present(&form) else {
            panic!("expected an error");
        };
        assert_eq!(alert, "Error generating barcode: ean13 requires 12 or 13 digits, got 2 characters");
        assert_eq!(hint, Some(LINEAR_HINT));
        assert!(input_error);
    }

    #[test]
    fn test_matrix_image() {
        let form = Form::matrix("https://www.example.org", MatrixStyle::default());
        let Presentation::Image { caption, download } = present(&form) else {
            panic!("expected an image");
        };
        assert_eq!(caption, MATRIX_CAPTION);
        assert_eq!(download.file_name, MATRIX_FILE_NAME);
    }

    #[test]
    fn test_matrix_error_has_no_hint() {
        let style = MatrixStyle { error_correction: barqr::ErrorCorrection::H, ..MatrixStyle::default() };
        let form = Form::matrix("1234567890".repeat(306), style);
        let Presentation::Error { alert, hint, .. } = present(&form) else {
            panic!("expected an error");
        };
        assert!(alert.starts_with("Error generating QR Code: "));
        assert_eq!(hint, None);
    }

    #[test]
    fn test_stateless() {
        let form = Form::matrix("again", MatrixStyle::default());
        assert_eq!(present(&form), present(&form));
    }
}
