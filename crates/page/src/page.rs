use crate::{FormState, InquiryClient, Navigator, Outcome, Section, Submission};

/// State owned by one rendering of the brochure page.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub navigator: Navigator,
    pub form: FormState,
    pub submission: Submission,
}

impl Page {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn scroll_to(&mut self, section_id: &str) -> Option<Section> {
        self.navigator.scroll_to(section_id)
    }

    pub async fn submit<C>(&mut self, client: &C) -> Option<&Outcome>
    where
        C: InquiryClient + ?Sized,
    {
        self.submission.submit(&mut self.form, client).await
    }
}
