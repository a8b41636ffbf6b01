//! Text views for the terminal front-end.
//!
//! - `tab_bar` - tab bar and key hints above the workspace
//! - `upload` - document upload widget
//!
//! The five workspace views sit behind [`WorkspaceViews`] so the screens
//! can be driven with any rendering.

pub mod tab_bar;
pub mod upload;

use std::fmt::Write;

use tax_core::{
    CHALLAN_280_STEPS, DEADLINES, PORTAL_LINKS, ProfileRecord, TabView, document_checklist,
};

pub use tab_bar::build_tab_bar;
pub use upload::{render_result, render_upload, render_upload_form};

/// One renderer per workspace tab.
///
/// Only the views that use the profile receive it.
pub trait WorkspaceViews {
    fn profile(
        &self,
        profile: &ProfileRecord,
    ) -> String;

    fn income_details(&self) -> String;

    fn tax_calculation(
        &self,
        profile: &ProfileRecord,
    ) -> String;

    fn reports(&self) -> String;

    fn guidance(
        &self,
        profile: &ProfileRecord,
    ) -> String;
}

/// Sends `view` to the matching renderer.
pub fn render_view<V: WorkspaceViews + ?Sized>(
    views: &V,
    view: TabView<'_>,
) -> String {
    match view {
        TabView::Profile(profile) => views.profile(profile),
        TabView::IncomeDetails => views.income_details(),
        TabView::TaxCalculation(profile) => views.tax_calculation(profile),
        TabView::Reports => views.reports(),
        TabView::Guidance(profile) => views.guidance(profile),
    }
}

/// Plain-text views used by the `intake` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleViews;

impl WorkspaceViews for ConsoleViews {
    fn profile(
        &self,
        profile: &ProfileRecord,
    ) -> String {
        format!("Your Profile\n\n{profile}")
    }

    fn income_details(&self) -> String {
        "Income Details\n\nUpload Form 16 with `tax-assistant upload <FILE>` to fill in salary and TDS.\n"
            .to_string()
    }

    fn tax_calculation(
        &self,
        profile: &ProfileRecord,
    ) -> String {
        let year = profile.fiscal_year.map_or("—", |fy| fy.label());
        let age = profile.age_group.map_or("—", |a| a.label());
        let residency = profile.residential_status.map_or("—", |r| r.label());
        format!(
            "Tax Calculation\n\nFinancial year: {year}\nAge group: {age}\nResidential status: {residency}\n\n\
             Old and new regime figures come from the backend after a Form 16 upload.\n"
        )
    }

    fn reports(&self) -> String {
        let mut out = String::from("Reports\n\nUpcoming Tax Deadlines\n");
        for deadline in DEADLINES {
            let _ = writeln!(out, "  {}: {}", deadline.date, deadline.description);
        }
        out
    }

    fn guidance(
        &self,
        profile: &ProfileRecord,
    ) -> String {
        let employment = profile.employment_type.map_or("any", |e| e.label());
        let mut out = format!("Guidance\n\nDocument Checklist ({employment})\n");
        for doc in document_checklist(profile.employment_type) {
            let _ = writeln!(out, "  [ ] {doc}");
        }

        out.push_str("\nTax Payment & Filing Guidance\n\nChallan 280 payment:\n");
        for (n, step) in CHALLAN_280_STEPS.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", n + 1);
        }
        out.push_str("\nImportant links:\n");
        for link in PORTAL_LINKS {
            let _ = writeln!(out, "  - {}: {}", link.title, link.url);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use pretty_assertions::assert_eq;
    use tax_core::{EmploymentType, ProfileField, Tab};

    /// Records which renderer ran and whether it was handed a profile.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(&'static str, bool)>>,
    }

    impl WorkspaceViews for Recorder {
        fn profile(
            &self,
            _: &ProfileRecord,
        ) -> String {
            self.calls.borrow_mut().push(("profile", true));
            String::new()
        }

        fn income_details(&self) -> String {
            self.calls.borrow_mut().push(("income_details", false));
            String::new()
        }

        fn tax_calculation(
            &self,
            _: &ProfileRecord,
        ) -> String {
            self.calls.borrow_mut().push(("tax_calculation", true));
            String::new()
        }

        fn reports(&self) -> String {
            self.calls.borrow_mut().push(("reports", false));
            String::new()
        }

        fn guidance(
            &self,
            _: &ProfileRecord,
        ) -> String {
            self.calls.borrow_mut().push(("guidance", true));
            String::new()
        }
    }

    #[test]
    fn each_tab_renders_exactly_one_view() {
        let profile = ProfileRecord::default();
        let recorder = Recorder::default();
        for tab in Tab::ALL {
            render_view(&recorder, tab.view(&profile));
        }
        assert_eq!(
            *recorder.calls.borrow(),
            vec![
                ("profile", true),
                ("income_details", false),
                ("tax_calculation", true),
                ("reports", false),
                ("guidance", true),
            ]
        );
    }

    #[test]
    fn guidance_lists_documents_for_employment_type() {
        let mut profile = ProfileRecord::default();
        profile.apply(ProfileField::EmploymentType(EmploymentType::Rental));
        let text = ConsoleViews.guidance(&profile);
        assert!(text.contains("Document Checklist (Rental)"));
        assert!(text.contains("  [ ] PAN Card\n"));
        assert!(text.contains("  [ ] Rent receipts\n"));
    }

    #[test]
    fn guidance_ends_with_payment_steps_and_portal_links() {
        let text = ConsoleViews.guidance(&ProfileRecord::default());
        let checklist = text.find("Document Checklist (any)").unwrap();
        let payment = text.find("Tax Payment & Filing Guidance").unwrap();
        assert!(checklist < payment);
        assert!(text.contains("  1. Visit the Income Tax e-filing portal\n"));
        assert!(text.contains("  7. Download and save the challan receipt\n"));
        assert!(text.ends_with(
            "  - TDS Certificate Download: https://www.incometax.gov.in/iec/foportal/help/tds-certificates\n"
        ));
    }

    #[test]
    fn reports_list_deadlines_in_order() {
        let text = ConsoleViews.reports();
        let june = text.find("June 15, 2025").unwrap();
        let march = text.find("March 15, 2026").unwrap();
        assert!(june < march);
    }

    #[test]
    fn profile_view_shows_record() {
        let mut profile = ProfileRecord::default();
        profile.apply(ProfileField::EmploymentType(EmploymentType::Investor));
        let text = ConsoleViews.profile(&profile);
        assert!(text.starts_with("Your Profile\n\n"));
        assert!(text.contains("Employment type:    Investor"));
    }
}
