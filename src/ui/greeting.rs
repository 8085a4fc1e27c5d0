use crate::types::Resolution;

/// The line reported back to the user once a name is resolved
pub fn greeting(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Recalled(name) => format!("Welcome back, {}!", name),
        Resolution::Created(name) => {
            format!("We'll remember you when you come back, {}!", name)
        }
    }
}
