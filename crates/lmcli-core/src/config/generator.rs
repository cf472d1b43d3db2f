//! Generators for fixed-format tooling files written into a new project

/// Static-analysis (SonarQube scanner) properties file
pub const SONAR_PROPERTIES_FILE: &str = "sonar-project.properties";

/// VCS ignore file
pub const GIT_IGNORE_FILE: &str = ".gitignore";

const GIT_IGNORE_CONTENT: &str = "# IDE files\n.vcs\n.idea\n\n\
                                  # Vendoring\nvendor\n\n\
                                  # OSX Junk files\n.DS_Store\n\n";

/// Content of the ignore file: IDE, vendoring and OS artifacts
pub fn git_ignore() -> &'static str {
    GIT_IGNORE_CONTENT
}

/// Build `sonar-project.properties` for a project.
///
/// The project key is `<key_prefix>.<lower-cased name>`, the display name is
/// the title-cased project name.
pub fn sonar_properties(key_prefix: &str, project_name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "sonar.projectKey={}.{}\n",
        key_prefix,
        project_name.to_lowercase()
    ));
    out.push_str("sonar.projectVersion=latest\n");
    out.push_str(&format!(
        "sonar.projectName={} Micro Service\n",
        title_case(project_name)
    ));
    out.push_str("sonar.sources=.\nsonar.language=go\nsonar.sourceEncoding=UTF-8\n");
    out.push_str("sonar.coverage.exclusions=**/*_test.go,**/vendor/**\n");
    out.push_str("sonar.exclusions=**/*_test.go,**/vendor/**\n");
    out.push_str("sonar.tests=.\nsonar.test.inclusions=**/*_test.go\n");
    out.push_str("sonar.test.exclusions=**/vendor/**\n");
    out.push_str("sonar.go.coverage.reportPaths=target/coverage.out\n");
    out.push_str("sonar.go.tests.reportPaths=target/tests.json\n");
    out
}

/// Upper-case the first letter of every word.
///
/// Letters, digits and underscores continue a word; anything else separates.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for c in s.chars() {
        if at_boundary {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !(c.is_alphanumeric() || c == '_');
    }
    out
}
