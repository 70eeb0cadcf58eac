mod error_screen;
mod guideline_item;
mod guideline_page;
mod inline_fragments;
mod page_footer;
mod section_view;

pub use error_screen::ErrorScreen;
pub use guideline_item::GuidelineItem;
pub use guideline_page::GuidelinePage;
pub use inline_fragments::InlineFragments;
pub use page_footer::PageFooter;
pub use section_view::SectionView;
