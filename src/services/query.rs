// In-memory query pipeline: filter, sort, and paginate one owner's tasks.
// Callers are expected to have refreshed the derived days-remaining field
// against the moment of the read before running a query.
use crate::models::{SortBy, SortOrder, Task, TaskFilters, TaskListParams, TaskPage};

pub(crate) fn run(tasks: Vec<Task>, params: &TaskListParams) -> TaskPage {
    let mut tasks = apply_filters(tasks, &params.filters);
    sort_tasks(&mut tasks, params.sort_by, params.sort_order);
    paginate(tasks, params.page, params.limit)
}

fn apply_filters(tasks: Vec<Task>, filters: &TaskFilters) -> Vec<Task> {
    let needle = filters.search.as_ref().map(|s| s.to_lowercase());
    tasks
        .into_iter()
        .filter(|task| {
            if let Some(status) = filters.status {
                if task.status != status {
                    return false;
                }
            }
            if let Some(is_urgent) = filters.is_urgent {
                if task.is_urgent != is_urgent {
                    return false;
                }
            }
            if let Some(needle) = &needle {
                if !task.title.to_lowercase().contains(needle)
                    && !task.description.to_lowercase().contains(needle)
                {
                    return false;
                }
            }
            true
        })
        .collect()
}

fn sort_tasks(tasks: &mut [Task], sort_by: SortBy, sort_order: SortOrder) {
    // sort_by is stable, so equal keys keep the stored order.
    tasks.sort_by(|a, b| {
        let ordering = match sort_by {
            SortBy::Title => a.title.cmp(&b.title),
            SortBy::DueDate => a.due_date.cmp(&b.due_date),
            SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
            SortBy::DaysRemaining => a.days_remaining.cmp(&b.days_remaining),
        };
        match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn paginate(tasks: Vec<Task>, page: usize, limit: usize) -> TaskPage {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = tasks.len();
    let total_pages = total.div_ceil(limit);
    let items = tasks
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();
    TaskPage {
        items,
        total,
        page,
        total_pages,
    }
}
