use birdfarm_shop::list::Page;
use birdfarm_shop::pagination::Paginated;
use birdfarm_shop::query::ListQuery;

fn page_of(count: usize, page_number: usize, page_size: usize, total_pages: usize) -> Page<usize> {
    Page::new((0..count).collect(), page_number, page_size, total_pages).unwrap()
}

fn numbers(paginated: &Paginated<usize>) -> Vec<Option<usize>> {
    paginated.links.iter().map(|l| l.number).collect()
}

#[test]
fn test_empty_page_renders_no_controls() {
    let paginated = Paginated::new(Page::<usize>::empty(12), "/birds", &ListQuery::default());
    assert!(paginated.is_empty());
    assert!(paginated.links.is_empty());
    assert_eq!(paginated.total_pages, 0);
}

#[test]
fn test_short_list_has_no_gaps() {
    let paginated = Paginated::new(page_of(5, 2, 12, 3), "/birds", &ListQuery::default());
    assert_eq!(numbers(&paginated), vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn test_window_in_the_middle_has_two_gaps() {
    let query = ListQuery::default().with_page(10);
    let paginated = Paginated::new(page_of(12, 10, 12, 20), "/birds", &query);
    let nums = numbers(&paginated);

    assert_eq!(nums.first(), Some(&Some(1)));
    assert_eq!(nums.last(), Some(&Some(20)));
    assert_eq!(nums.iter().filter(|n| n.is_none()).count(), 2);
    assert!(nums.contains(&Some(10)));
    assert!(nums.contains(&Some(8)));
    assert!(nums.contains(&Some(14)));

    let current: Vec<usize> = paginated
        .links
        .iter()
        .filter(|l| l.current)
        .filter_map(|l| l.number)
        .collect();
    assert_eq!(current, vec![10]);
}

#[test]
fn test_window_numbers_are_strictly_increasing() {
    let paginated = Paginated::new(page_of(12, 10, 12, 20), "/birds", &ListQuery::default().with_page(10));
    let nums: Vec<usize> = numbers(&paginated).into_iter().flatten().collect();
    assert!(nums.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_current_page_past_the_end_is_clamped() {
    let paginated = Paginated::new(page_of(3, 99, 12, 4), "/birds", &ListQuery::default().with_page(99));
    assert_eq!(paginated.page, 4);
    assert!(paginated.links.iter().any(|l| l.number == Some(4) && l.current));
}

#[test]
fn test_gap_links_carry_no_url() {
    let paginated = Paginated::new(page_of(12, 10, 12, 20), "/birds", &ListQuery::default().with_page(10));
    for link in &paginated.links {
        match link.number {
            Some(n) => {
                let url = link.url.as_deref().unwrap();
                assert!(url.contains(&format!("pageNumber={n}")));
                assert!(!link.current || n == 10);
            }
            None => {
                assert!(link.url.is_none());
                assert!(!link.current);
            }
        }
    }
}

#[test]
fn test_links_preserve_active_filters() {
    let query = ListQuery::decode("searchQuery=finch&specie=sp-1&pageNumber=2");
    let paginated = Paginated::new(page_of(12, 2, 12, 5), "/birds", &query);
    for link in paginated.links.iter().filter(|l| l.number.is_some()) {
        let url = link.url.as_deref().unwrap();
        assert!(url.starts_with("/birds?"));
        assert!(url.contains("searchQuery=finch"));
        assert!(url.contains("specie=sp-1"));
    }
}

#[test]
fn test_single_page_list() {
    let paginated = Paginated::new(page_of(4, 1, 12, 1), "/birds", &ListQuery::default());
    assert_eq!(numbers(&paginated), vec![Some(1)]);
    assert!(paginated.links[0].current);
}
