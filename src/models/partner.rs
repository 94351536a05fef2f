/// A sponsor or partner shown on the partners page. Partners are static content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub photo: &'static str,
}

impl Partner {
    pub fn image_url(&self) -> String {
        format!("/images/partners/{}", self.photo)
    }
}
