mod commit_ids_are_sequential_across_invocations;
mod commit_with_empty_staging_fails;
