//! Page window metadata derived from a total record count

/// Where a page sits within the full result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationWindow {
    pub current_page: i64,
    pub total_pages: i64,
    pub records_on_page: i64,
    pub total_records: i64,
}

impl PaginationWindow {
    /// Compute the window for `current_page` (1-based).
    ///
    /// Pages before the last report a full `page_size`; the last page reports
    /// the remainder; pages past the end report zero.
    pub fn compute(current_page: i64, page_size: i64, total_records: i64) -> Self {
        let total_records = total_records.max(0);
        if page_size <= 0 || total_records == 0 {
            return Self {
                current_page,
                total_pages: 0,
                records_on_page: 0,
                total_records,
            };
        }

        let total_pages = (total_records + page_size - 1) / page_size;
        let records_on_page = if current_page < 1 || current_page > total_pages {
            0
        } else if current_page == total_pages {
            total_records - page_size * (total_pages - 1)
        } else {
            page_size
        };

        Self {
            current_page,
            total_pages,
            records_on_page,
            total_records,
        }
    }
}
