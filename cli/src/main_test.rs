use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("mentorhub").chain(args.iter().copied())).unwrap()
}

#[test]
fn login_takes_email_and_password() {
    let cli = parse(&["login", "--email", "a@b.com", "--password", "pw"]);
    let Command::Login(args) = cli.command else {
        panic!("expected login");
    };
    assert_eq!(args.email, "a@b.com");
    assert_eq!(args.password, "pw");
}

#[test]
fn register_role_defaults_to_member_and_parses_case_insensitively() {
    let base = ["register", "--full-name", "Ada L", "--email", "a@b.com", "--profile-details", "x", "--password", "pw"];
    let Command::Register(args) = parse(&base).command else {
        panic!("expected register");
    };
    assert_eq!(args.role, Role::Member);

    let mut with_role = base.to_vec();
    with_role.extend(["--role", "mentor"]);
    let Command::Register(args) = parse(&with_role).command else {
        panic!("expected register");
    };
    assert_eq!(args.role, Role::Mentor);
}

#[test]
fn register_rejects_unknown_role() {
    let result = Cli::try_parse_from([
        "mentorhub", "register", "--full-name", "A", "--email", "a@b.com", "--profile-details", "x", "--password",
        "pw", "--role", "owner",
    ]);
    assert!(result.is_err());
}

#[test]
fn api_parses_method_path_and_data() {
    let cli = parse(&["api", "post", "/programs", "--data", r#"{"name":"x"}"#]);
    let Command::Api(args) = cli.command else {
        panic!("expected api");
    };
    assert_eq!(args.method, Method::Post);
    assert_eq!(args.path, "/programs");
    assert_eq!(args.data.as_deref(), Some(r#"{"name":"x"}"#));
}

#[test]
fn api_rejects_unknown_method() {
    assert!(Cli::try_parse_from(["mentorhub", "api", "trace", "/"]).is_err());
}

#[test]
fn session_file_flag_overrides_default() {
    let cli = parse(&["--session-file", "/tmp/s.json", "whoami"]);
    assert_eq!(cli.session_file, Some(PathBuf::from("/tmp/s.json")));
    assert!(matches!(cli.command, Command::Whoami));
}

#[test]
fn menu_lines_end_with_logout() {
    let lines = menu_lines(Role::Admin);
    assert!(lines[0].starts_with("Admin Dashboard"));
    assert!(lines[0].ends_with("/dashboard"));
    assert_eq!(lines.last().map(String::as_str), Some("Logout"));
}

#[test]
fn expiry_line_reports_undecodable_tokens() {
    assert!(expiry_line("not-a-token").starts_with("unknown"));
}
