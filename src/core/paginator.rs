use std::future::Future;

use tracing::debug;

use crate::core::provider::RecordApi;
use crate::core::record::{Domain, Page, RecordCollection, RecordQuery};
use crate::error::Error;

/// Fetches pages starting at 1 until the reported page count is reached.
///
/// A page count of zero counts as one page, and a count below the current
/// page ends the loop. The first failing page aborts the whole listing.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>, Error>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, Error>>,
{
    let mut items = Vec::new();
    let mut page = 1;
    loop {
        let Page {
            items: batch,
            total_pages,
        } = fetch(page).await?;
        debug!(page, total_pages, count = batch.len(), "fetched page");
        items.extend(batch);
        if page >= total_pages.max(1) {
            break;
        }
        page += 1;
    }
    Ok(items)
}

pub async fn list_all(
    api: &dyn RecordApi,
    account: &str,
    zone: &str,
    type_filter: Option<&str>,
) -> Result<RecordCollection, Error> {
    let records = collect_pages(|page| {
        let query = RecordQuery {
            page,
            type_filter: type_filter.map(str::to_string),
        };
        async move { api.list_records(account, zone, &query).await }
    })
    .await?;
    debug!(zone, count = records.len(), "listed zone records");
    Ok(RecordCollection::new(records))
}

pub async fn list_domains(api: &dyn RecordApi, account: &str) -> Result<Vec<Domain>, Error> {
    collect_pages(|page| api.list_domains(account, page)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::MockRecordApi;
    use crate::core::record::tests::record;
    use assert_matches::assert_matches;
    use mockall::Sequence;

    fn page_of(ids: &[i64], total_pages: u32) -> Page<crate::core::record::Record> {
        Page {
            items: ids
                .iter()
                .map(|id| record(*id, &format!("host{id}"), "A", "1.2.3.4"))
                .collect(),
            total_pages,
        }
    }

    fn ids(records: &RecordCollection) -> Vec<String> {
        records
            .iter()
            .map(|r| r.id.as_ref().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_concatenates_pages_in_order() {
        let mut api = MockRecordApi::new();
        let mut seq = Sequence::new();
        for (page, batch) in [(1u32, vec![1, 2]), (2, vec![3]), (3, vec![4, 5])] {
            api.expect_list_records()
                .withf(move |account, zone, query| {
                    account == "1010" && zone == "example.com" && query.page == page
                })
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_, _, _| Ok(page_of(&batch, 3)));
        }

        let records = list_all(&api, "1010", "example.com", None).await.unwrap();
        assert_eq!(ids(&records), ["1", "2", "3", "4", "5"]);
    }

    #[tokio::test]
    async fn test_zero_total_pages_fetches_once() {
        let mut api = MockRecordApi::new();
        api.expect_list_records()
            .times(1)
            .returning(|_, _, _| Ok(page_of(&[], 0)));

        let records = list_all(&api, "1010", "example.com", None).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_shrinking_page_count_stops_loop() {
        let mut api = MockRecordApi::new();
        let mut seq = Sequence::new();
        api.expect_list_records()
            .withf(|_, _, query| query.page == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(page_of(&[1], 5)));
        api.expect_list_records()
            .withf(|_, _, query| query.page == 2)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(page_of(&[2], 1)));

        let records = list_all(&api, "1010", "example.com", None).await.unwrap();
        assert_eq!(ids(&records), ["1", "2"]);
    }

    #[tokio::test]
    async fn test_type_filter_sent_on_every_page() {
        let mut api = MockRecordApi::new();
        api.expect_list_records()
            .withf(|_, _, query| query.type_filter.as_deref() == Some("TXT"))
            .times(2)
            .returning(|_, _, query| Ok(page_of(&[i64::from(query.page)], 2)));

        let records = list_all(&api, "1010", "example.com", Some("TXT"))
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_page_aborts_listing() {
        let mut api = MockRecordApi::new();
        api.expect_list_records()
            .returning(|_, _, query| match query.page {
                1 => Ok(page_of(&[1, 2], 3)),
                _ => Err(Error::Transport("page 2 exploded".into())),
            })
            .times(2);

        let result = list_all(&api, "1010", "example.com", None).await;
        assert_matches!(result, Err(Error::Transport(msg)) if msg == "page 2 exploded");
    }

    #[tokio::test]
    async fn test_list_domains_walks_pages() {
        let mut api = MockRecordApi::new();
        api.expect_list_domains()
            .withf(|account, _| account == "1010")
            .times(2)
            .returning(|_, page| {
                Ok(Page {
                    items: vec![Domain {
                        name: format!("zone{page}.com"),
                        expires_on: None,
                    }],
                    total_pages: 2,
                })
            });

        let domains = list_domains(&api, "1010").await.unwrap();
        let names: Vec<&str> = domains.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["zone1.com", "zone2.com"]);
    }

    #[test]
    fn test_collect_pages_counts_calls() {
        for total in 0u32..5 {
            let mut calls = 0;
            let items = tokio_test::block_on(collect_pages(|page| {
                calls += 1;
                async move {
                    Ok(Page {
                        items: vec![page],
                        total_pages: total,
                    })
                }
            }))
            .unwrap();
            assert_eq!(calls, total.max(1));
            assert_eq!(items, (1..=total.max(1)).collect::<Vec<_>>());
        }
    }
}
