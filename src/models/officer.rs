/// One row of `officers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Officer {
    pub name: String,
    pub post_location: String,
    pub shift_time: String,
}

impl Officer {
    pub fn new(name: &str, post_location: &str, shift_time: &str) -> Self {
        Self {
            name: name.to_string(),
            post_location: post_location.to_string(),
            shift_time: shift_time.to_string(),
        }
    }
}
