use dotenvy::{dotenv, var};

// Both of these are necessary for operation, so startup stops with a clear
// message when either is missing instead of failing on the first conversion.
const REQUIRED_VARIABLES: &[(&str, &str)] = &[
    ("API_KEY", "exchangerate-api.com API key"),
    ("POSTGRES_URL", "Postgres connection URL"),
];

pub fn ensure_required_env() -> anyhow::Result<()> {
    for (variable, description) in REQUIRED_VARIABLES {
        if get_env_variable(variable).is_none() {
            anyhow::bail!(
                "{} is not set. Please set a valid {} as {} in your environment variables or .env file",
                variable,
                description,
                variable
            );
        }
    }
    Ok(())
}

pub fn get_env_variable(variable_to_get: &str) -> Option<String> {
    dotenv().ok();
    var(variable_to_get).ok()
}
