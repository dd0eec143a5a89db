use nameof_parser::parse_pretty_function;

/// GCC 14 captures: (description, fully-qualified name).
const CAPTURES: &[(&str, &str)] = &[
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with auto V = test_enum::test_zero]",
        "test_enum::test_zero",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with auto V = (& variable)]",
        "variable",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with auto V = 1]",
        "1",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with auto V = function]",
        "function",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with auto V = func]",
        "func",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with auto V = (& constant)]",
        "constant",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with T = std::basic_string_view<char>]",
        "std::basic_string_view<char>",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with T = TestSpace::Test]",
        "TestSpace::Test",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with auto V = &TestSpace::Test::member]",
        "TestSpace::Test::member",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with auto V = &TestSpace::Test::Inner::member]",
        "TestSpace::Test::Inner::member",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with T = TestSpace::Test::Template<wchar_t>]",
        "TestSpace::Test::Template<wchar_t>",
    ),
    (
        "int probe(std::initializer_list<std::basic_string_view<char> >) [with auto V = &TestSpace::Test::Template<wchar_t>::method]",
        "TestSpace::Test::Template<wchar_t>::method",
    ),];

#[test]
fn test_captured_signatures() {
    for (input, expected) in CAPTURES {
        assert_eq!(parse_pretty_function(input), *expected, "input: {input}");
    }
}

#[test]
fn test_address_of_member() {
    let input = "int test(...) [with auto V = &TestSpace::Test::Template<wchar_t>::method]";
    assert_eq!(
        parse_pretty_function(input),
        "TestSpace::Test::Template<wchar_t>::method"
    );
}

#[test]
fn test_parenthesized_address() {
    assert_eq!(parse_pretty_function("... [with auto V = (& variable)]"), "variable");
}

#[test]
fn test_clang_binding_clause() {
    assert_eq!(
        parse_pretty_function("auto probe() [T = TestSpace::Test::Template<wchar_t>]"),
        "TestSpace::Test::Template<wchar_t>"
    );
}

#[test]
fn test_stops_at_next_binding() {
    assert_eq!(
        parse_pretty_function(
            "constexpr auto name() [with T = std::basic_string_view<char>; name_type = std::basic_string_view<char>]"
        ),
        "std::basic_string_view<char>"
    );
}

#[test]
fn test_without_binding_returns_input() {
    for input in ["", "variable", "int probe() [with T]", "TestSpace::Test::method"] {
        assert_eq!(parse_pretty_function(input), input);
    }
}

#[test]
fn test_without_terminator_keeps_remainder() {
    assert_eq!(parse_pretty_function("[with T = Space::Type"), "Space::Type");
}

#[test]
fn test_binding_at_end_of_input() {
    assert_eq!(parse_pretty_function("[with T ="), "");
    assert_eq!(parse_pretty_function("[with T = "), "");
}

#[test]
fn test_multibyte_after_equals() {
    // The byte after `=` is normally a space; anything else is skipped whole.
    assert_eq!(parse_pretty_function("x =\u{e9}value]"), "value");
}
