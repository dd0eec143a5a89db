use nameof_parser::{short_name, short_name_of, Grammar};

#[test]
fn test_template_stem() {
    assert_eq!(short_name_of("NameSpace::Class::Template<wchar_t>"), "Template");
}

#[test]
fn test_unqualified_name_is_unchanged() {
    assert_eq!(short_name_of("variable"), "variable");
    assert_eq!(short_name_of(""), "");
    assert_eq!(short_name_of("0x1"), "0x1");
}

#[test]
fn test_member_of_template() {
    assert_eq!(short_name_of("TestSpace::Test::Template<wchar_t>::method"), "method");
    assert_eq!(short_name_of("Outer::Inner::Templ<Arg>::member"), "member");
}

#[test]
fn test_single_scope() {
    assert_eq!(short_name_of("test_enum::test_zero"), "test_zero");
    assert_eq!(short_name_of("::global"), "global");
}

#[test]
fn test_trailing_template_arguments_dropped() {
    assert_eq!(short_name_of("basic_string_view<char>"), "basic_string_view");
}

#[test]
fn test_idempotent() {
    let names = [
        "NameSpace::Class::Template<wchar_t>",
        "TestSpace::Test::Template<wchar_t>::method",
        "std::basic_string_view<char,struct std::char_traits<char> >",
        "Outer<A::B>",
        "a:::b",
        "a::b:",
        "x<",
        "::",
        "variable",
        "",
    ];
    for name in names {
        let once = short_name_of(name);
        assert_eq!(short_name_of(once), once, "name: {name}");
    }
}

#[test]
fn test_short_name_pipeline() {
    let description =
        "int test(...) [with auto V = &TestSpace::Test::Template<wchar_t>::method]";
    assert_eq!(short_name(Grammar::PrettyFunction, description), "method");

    let description = "int __cdecl test<struct NameSpace::Class::Template<wchar_t>>(void)";
    assert_eq!(short_name(Grammar::Funcsig, description), "Template");
}
