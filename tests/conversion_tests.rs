use numsay::{convert, ConvertError, NumericInput};

#[test]
fn test_convert_fails_with_invalid_inputs() {
    assert_eq!(
        convert(3.14).unwrap_err(),
        ConvertError::FloatingPointNotSupported
    );
    assert_eq!(
        convert("3.14").unwrap_err(),
        ConvertError::NotDigitsOnly {
            value: "3.14".to_string()
        }
    );
    // one past the 27-digit maximum, as number and as string
    assert_eq!(
        convert("1000000000000000000000000000").unwrap_err(),
        ConvertError::NumberTooLarge { max_digits: 27 }
    );
    assert_eq!(
        convert(1_000_000_000_000_000_000_000_000_000i128).unwrap_err(),
        ConvertError::NumberTooLarge { max_digits: 27 }
    );
}

#[test]
fn test_error_messages_name_the_problem() {
    let not_digits = convert("12abc").unwrap_err();
    assert_eq!(
        not_digits.to_string(),
        "'12abc' is not a valid number. It should contain digits only."
    );

    let too_large = convert("1".repeat(28).as_str()).unwrap_err();
    assert_eq!(
        too_large.to_string(),
        "Number is too large. The maximum number length is 27 digits"
    );

    assert_eq!(
        convert(0.5).unwrap_err().to_string(),
        "Floating point numbers are not supported"
    );
}

#[test]
fn test_convert_accepts_string_or_integer() {
    assert_eq!(convert(100).unwrap().as_str(), "one hundred");
    assert_eq!(convert("100").unwrap().as_str(), "one hundred");
}

#[test]
fn test_convert_handles_negative_numbers() {
    for input in [NumericInput::from(-100), NumericInput::from("-100")] {
        let result = numsay::Converter::new().convert(&input).unwrap();
        assert_eq!(result.as_str(), "minus, one hundred");
        assert!(result.is_negative());
    }
}

#[test]
fn test_million_pluralization() {
    let one = convert(1_000_000).unwrap().to_string();
    assert!(one.contains(" million"));
    assert!(!one.contains(" millions"));

    for n in (2_000_000i64..10_000_000).step_by(1_000_000) {
        assert!(convert(n).unwrap().as_str().contains(" millions"));
    }
}

#[test]
fn test_billion_pluralization() {
    let one = convert(1_000_000_000i64).unwrap().to_string();
    assert!(one.contains(" billion"));
    assert!(!one.contains(" billions"));

    for n in (2_000_000_000i64..10_000_000_000).step_by(1_000_000_000) {
        assert!(convert(n).unwrap().as_str().contains(" billions"));
    }
}

#[test]
fn test_thousand_is_never_pluralized() {
    assert_eq!(convert(2000).unwrap().as_str(), "two thousand");
    assert_eq!(
        convert(5000).unwrap().as_str(),
        "five thousand"
    );
}

#[test]
fn test_complex_numbers() {
    assert_eq!(
        convert(9876543210i64).unwrap().as_str(),
        "nine billions, eight hundred and seventy six millions, \
         five hundred and forty three thousand, two hundred and ten"
    );
    assert_eq!(
        convert(1234567890123456789i64).unwrap().as_str(),
        "one quintillion, two hundred and thirty four quadrillions, \
         five hundred and sixty seven trillions, eight hundred and ninety billions, \
         one hundred and twenty three millions, four hundred and fifty six thousand, \
         seven hundred and eighty nine"
    );
}

#[test]
fn test_and_insertion_edge_cases() {
    let cases: [(i64, &str); 6] = [
        (101, "one hundred and one"),
        (110, "one hundred and ten"),
        (1001, "one thousand and one"),
        (1000001, "one million and one"),
        (1100001, "one million, one hundred thousand and one"),
        (-1101001, "minus, one million, one hundred and one thousand and one"),
    ];
    for (input, expected) in cases {
        assert_eq!(convert(input).unwrap().as_str(), expected);
    }
}

#[test]
fn test_negative_large_numbers() {
    assert_eq!(
        convert(-123).unwrap().as_str(),
        "minus, one hundred and twenty three"
    );
    assert_eq!(
        convert(-987654321i64).unwrap().as_str(),
        "minus, nine hundred and eighty seven millions, \
         six hundred and fifty four thousand, three hundred and twenty one"
    );
}

#[test]
fn test_teens_and_tens() {
    let cases: [(i64, &str); 6] = [
        (11, "eleven"),
        (15, "fifteen"),
        (19, "nineteen"),
        (20, "twenty"),
        (30, "thirty"),
        (99, "ninety nine"),
    ];
    for (input, expected) in cases {
        assert_eq!(convert(input).unwrap().as_str(), expected);
    }
}

#[test]
fn test_hundreds_and_thousands() {
    let cases: [(i64, &str); 3] = [
        (300, "three hundred"),
        (4567, "four thousand, five hundred and sixty seven"),
        (789012, "seven hundred and eighty nine thousand and twelve"),
    ];
    for (input, expected) in cases {
        assert_eq!(convert(input).unwrap().as_str(), expected);
    }
}

#[test]
fn test_leading_zeros_and_whitespace() {
    let cases: [(&str, &str); 4] = [
        ("000123", "one hundred and twenty three"),
        ("  456  ", "four hundred and fifty six"),
        ("   -456   ", "minus, four hundred and fifty six"),
        ("000123000", "one hundred and twenty three thousand"),
    ];
    for (input, expected) in cases {
        assert_eq!(convert(input).unwrap().as_str(), expected);
    }
    assert_eq!(convert("000123").unwrap(), convert(123).unwrap());
    assert_eq!(convert("  456  ").unwrap().as_str(), convert(456).unwrap().as_str());
}

#[test]
fn test_maximum_supported_number() {
    let expected = "nine hundred and ninety nine septillions, \
                    nine hundred and ninety nine sextillions, \
                    nine hundred and ninety nine quintillions, \
                    nine hundred and ninety nine quadrillions, \
                    nine hundred and ninety nine trillions, \
                    nine hundred and ninety nine billions, \
                    nine hundred and ninety nine millions, \
                    nine hundred and ninety nine thousand, \
                    nine hundred and ninety nine";

    assert_eq!(
        convert("999999999999999999999999999").unwrap().as_str(),
        expected
    );
    assert_eq!(
        convert("-999999999999999999999999999").unwrap().as_str(),
        format!("minus, {expected}")
    );
}

#[test]
fn test_small_numbers_and_zero() {
    assert_eq!(convert(0).unwrap().as_str(), "zero");
    assert_eq!(convert("0").unwrap().as_str(), "zero");
    assert_eq!(convert("-0").unwrap().as_str(), "zero");
    assert_eq!(convert(-1).unwrap().as_str(), "minus, one");
    assert_eq!(convert("-1").unwrap().as_str(), "minus, one");

    let zero = convert("-0").unwrap();
    assert!(!zero.is_negative());
}

#[test]
fn test_conversion_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(
            convert(123123123).unwrap().as_str(),
            "one hundred and twenty three millions, \
             one hundred and twenty three thousand, \
             one hundred and twenty three"
        );
    }
}

#[test]
fn test_number_text_serializes_to_json() {
    let result = convert(-7).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"text":"minus, seven","negative":true}"#);
}
