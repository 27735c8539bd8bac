//! Item Submission State
//!
//! The draft behind the listing form and the lifecycle of a submission.

use crate::api::Created;
use crate::error::ApiError;

/// Field names shared by the form inputs and the multipart body
pub const NAME_FIELD: &str = "name";
pub const CATEGORY_FIELD: &str = "category";
pub const IMAGE_FIELD: &str = "image";

/// Form state before it is sent. `F` is the file handle type.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<F> {
    pub name: String,
    pub category: String,
    pub image: Option<F>,
}

impl<F> Default for Draft<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            image: None,
        }
    }
}

/// One entry of the multipart body
#[derive(Debug, PartialEq)]
pub enum Part<'a, F> {
    Text { field: &'static str, value: &'a str },
    File { field: &'static str, file: &'a F },
}

impl<F> Draft<F> {
    /// Update the text field named by an input's `name` attribute.
    /// Returns false for names the draft does not know.
    pub fn set_text(&mut self, input_name: &str, value: String) -> bool {
        match input_name {
            NAME_FIELD => self.name = value,
            CATEGORY_FIELD => self.category = value,
            _ => return false,
        }
        true
    }

    pub fn set_image(&mut self, image: Option<F>) {
        self.image = image;
    }

    /// Mirrors the form's `required` attributes
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty() && self.image.is_some()
    }

    /// Multipart entries in send order; the image only when one is held
    pub fn parts(&self) -> Vec<Part<'_, F>> {
        let mut parts = vec![
            Part::Text { field: NAME_FIELD, value: &self.name },
            Part::Text { field: CATEGORY_FIELD, value: &self.category },
        ];
        if let Some(file) = &self.image {
            parts.push(Part::File { field: IMAGE_FIELD, file });
        }
        parts
    }
}

/// Submission lifecycle of one form. There is no terminal state: the form
/// stays populated and any edit returns it to `Editing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
    SubmittedOk,
    SubmittedNetworkError,
}

impl SubmitPhase {
    pub fn edited(self) -> Self {
        match self {
            Self::Submitting => Self::Submitting,
            _ => Self::Editing,
        }
    }

    pub fn submitted(self) -> Self {
        Self::Submitting
    }

    /// `responded` is true when the server answered at all, whatever the status
    pub fn settled(self, responded: bool) -> Self {
        if responded {
            Self::SubmittedOk
        } else {
            Self::SubmittedNetworkError
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::SubmittedOk => "submitted",
            Self::SubmittedNetworkError => "network-error",
        }
    }
}

/// Everything the listing form holds between renders
#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm<F> {
    pub draft: Draft<F>,
    pub phase: SubmitPhase,
    /// `data:` URI of the held image, once read
    pub preview: Option<String>,
    /// Bumped on every file selection; older reads are stale
    preview_ticket: u64,
}

impl<F> Default for ListingForm<F> {
    fn default() -> Self {
        Self {
            draft: Draft::default(),
            phase: SubmitPhase::default(),
            preview: None,
            preview_ticket: 0,
        }
    }
}

impl<F> ListingForm<F> {
    pub fn edit_text(&mut self, input_name: &str, value: String) {
        if self.draft.set_text(input_name, value) {
            self.phase = self.phase.edited();
        }
    }

    /// Hold a new image (or none). Returns the ticket its preview must
    /// present to be shown.
    pub fn select_image(&mut self, image: Option<F>) -> u64 {
        self.draft.set_image(image);
        self.phase = self.phase.edited();
        self.preview = None;
        self.preview_ticket += 1;
        self.preview_ticket
    }

    /// Show a finished read, unless another selection came after it.
    pub fn show_preview(&mut self, ticket: u64, uri: String) -> bool {
        if ticket != self.preview_ticket || self.draft.image.is_none() {
            return false;
        }
        self.preview = Some(uri);
        true
    }

    /// Snapshot of the draft to send, or `None` when required fields are
    /// missing and nothing may be sent.
    pub fn begin_submit(&mut self) -> Option<Draft<F>>
    where
        F: Clone,
    {
        if !self.draft.is_submittable() {
            return None;
        }
        self.phase = self.phase.submitted();
        Some(self.draft.clone())
    }

    /// Record how a submission ended. Returns true when the completion
    /// callback is due. The draft is left as it was either way.
    pub fn settle(&mut self, result: &Result<Created, ApiError>) -> bool {
        match result {
            Ok(_) => {
                self.phase = self.phase.settled(true);
                true
            }
            Err(ApiError::Aborted) => false,
            Err(_) => {
                self.phase = self.phase.settled(false);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResponseStatus;

    /// Stand-in for a browser file handle
    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile(&'static str);

    fn filled() -> Draft<FakeFile> {
        let mut draft = Draft::default();
        draft.set_text("name", "Widget".to_string());
        draft.set_text("category", "Tools".to_string());
        draft.set_image(Some(FakeFile("widget.jpg")));
        draft
    }

    #[test]
    fn fields_update_independently_by_input_name() {
        let mut draft: Draft<FakeFile> = Draft::default();
        assert!(draft.set_text("category", "Tools".to_string()));
        assert_eq!(draft.name, "");
        assert_eq!(draft.category, "Tools");

        assert!(draft.set_text("name", "Widget".to_string()));
        assert_eq!(draft.category, "Tools");
    }

    #[test]
    fn unknown_input_names_are_ignored() {
        let mut draft: Draft<FakeFile> = Draft::default();
        assert!(!draft.set_text("price", "10".to_string()));
        assert!(!draft.set_text("image", "c:\\fakepath\\a.jpg".to_string()));
        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn full_draft_sends_all_three_fields() {
        let draft = filled();
        assert!(draft.is_submittable());
        assert_eq!(
            draft.parts(),
            vec![
                Part::Text { field: "name", value: "Widget" },
                Part::Text { field: "category", value: "Tools" },
                Part::File { field: "image", file: &FakeFile("widget.jpg") },
            ]
        );
    }

    #[test]
    fn draft_without_image_is_blocked_and_omits_image() {
        let mut draft = filled();
        draft.set_image(None);
        assert!(!draft.is_submittable());
        assert_eq!(draft.parts().len(), 2);
    }

    #[test]
    fn empty_name_is_blocked_but_category_is_optional() {
        let mut draft = filled();
        draft.set_text("category", String::new());
        assert!(draft.is_submittable());

        draft.set_text("name", String::new());
        assert!(!draft.is_submittable());
    }

    #[test]
    fn phase_walks_the_submission_lifecycle() {
        let phase = SubmitPhase::default();
        assert_eq!(phase, SubmitPhase::Idle);

        let phase = phase.edited();
        assert_eq!(phase, SubmitPhase::Editing);

        let phase = phase.submitted();
        assert_eq!(phase.edited(), SubmitPhase::Submitting);

        assert_eq!(phase.settled(true), SubmitPhase::SubmittedOk);
        assert_eq!(phase.settled(false), SubmitPhase::SubmittedNetworkError);
        assert_eq!(phase.settled(false).edited(), SubmitPhase::Editing);
        assert_eq!(phase.settled(true).edited(), SubmitPhase::Editing);
    }

    fn created(code: u16, text: &str) -> Result<Created, ApiError> {
        Ok(Created {
            status: ResponseStatus {
                code,
                text: text.to_string(),
            },
            message: None,
        })
    }

    fn ready_form() -> ListingForm<FakeFile> {
        let mut form = ListingForm::default();
        form.edit_text("name", "Widget".to_string());
        form.edit_text("category", "Tools".to_string());
        form.select_image(Some(FakeFile("widget.jpg")));
        form
    }

    #[test]
    fn network_failure_keeps_values_and_skips_callback() {
        let mut form = ready_form();
        let sent = form.begin_submit().unwrap();
        assert_eq!(form.phase, SubmitPhase::Submitting);

        let notify = form.settle(&Err(ApiError::Network("Failed to fetch".to_string())));
        assert!(!notify);
        assert_eq!(form.phase, SubmitPhase::SubmittedNetworkError);
        assert_eq!(form.draft, sent);

        // Retry without re-entering anything
        assert_eq!(form.begin_submit(), Some(sent));
    }

    #[test]
    fn any_response_completes_the_listing() {
        for (code, text) in [(200, "OK"), (201, "Created"), (400, "Bad Request"), (500, "")] {
            let mut form = ready_form();
            let sent = form.begin_submit().unwrap();
            assert!(form.settle(&created(code, text)), "status {}", code);
            assert_eq!(form.phase, SubmitPhase::SubmittedOk);
            assert_eq!(form.draft, sent);
        }
    }

    #[test]
    fn aborted_submission_changes_nothing() {
        let mut form = ready_form();
        form.begin_submit().unwrap();
        let before = form.clone();

        assert!(!form.settle(&Err(ApiError::Aborted)));
        assert_eq!(form, before);
    }

    #[test]
    fn incomplete_form_never_starts_a_submission() {
        let mut form: ListingForm<FakeFile> = ListingForm::default();
        form.edit_text("name", "Widget".to_string());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.phase, SubmitPhase::Editing);
    }

    #[test]
    fn late_read_of_replaced_file_is_not_shown() {
        let mut form: ListingForm<FakeFile> = ListingForm::default();
        let large = form.select_image(Some(FakeFile("large.jpg")));
        let small = form.select_image(Some(FakeFile("small.jpg")));

        assert!(form.show_preview(small, "data:image/jpeg;base64,c21hbGw=".to_string()));
        assert!(!form.show_preview(large, "data:image/jpeg;base64,bGFyZ2U=".to_string()));
        assert_eq!(form.preview.as_deref(), Some("data:image/jpeg;base64,c21hbGw="));
        assert_eq!(form.draft.image, Some(FakeFile("small.jpg")));
    }

    #[test]
    fn late_read_after_clearing_selection_is_not_shown() {
        let mut form: ListingForm<FakeFile> = ListingForm::default();
        let picked = form.select_image(Some(FakeFile("a.jpg")));
        form.select_image(None);

        assert!(!form.show_preview(picked, "data:image/jpeg;base64,YQ==".to_string()));
        assert_eq!(form.preview, None);
        assert_eq!(form.draft.image, None);
    }

    #[test]
    fn preview_set_as_soon_as_the_read_finishes() {
        let mut form: ListingForm<FakeFile> = ListingForm::default();
        let ticket = form.select_image(Some(FakeFile("a.jpg")));
        assert!(form.show_preview(ticket, "data:image/png;base64,AAAA".to_string()));
        assert_eq!(form.preview.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(form.phase, SubmitPhase::Editing);
    }

    #[test]
    fn settled_form_can_submit_again() {
        let phase = SubmitPhase::Editing.submitted().settled(false);
        assert_eq!(phase.submitted(), SubmitPhase::Submitting);
    }
}
