use crate::scenarios::ScenarioDef;

const ARXIV_DOMAINS: &[(&str, &str)] = &[
    ("cs", "Computer Science"),
    ("econ", "Economics"),
    ("eess", "Electrical Engineering"),
    ("math", "Mathematics"),
    ("physics", "Physics"),
    ("q-bio", "Quantitative Biology"),
    ("q-fin", "Quantitative Finance"),
    ("stat", "Statistics"),
];

pub fn arxiv_domains() -> Vec<ScenarioDef> {
    ARXIV_DOMAINS
        .iter()
        .map(|&(id, name)| ScenarioDef::new(id, name))
        .collect()
}
