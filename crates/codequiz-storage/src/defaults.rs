//! Builtin suggestion catalog
//!
//! Baked-in suggestion lists for the seed problem set, keyed by problem id.
//! The insert texts are Python snippets; the completion source fences them
//! as whatever language the provider is registered for.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use codequiz_domain::Suggestion;

use crate::catalog::SuggestionCatalog;

const DETAIL: &str = "AI Suggestion";

static BUILTIN: Lazy<SuggestionCatalog> = Lazy::new(|| {
    let mut by_problem = HashMap::new();

    // 1: Two Sum
    by_problem.insert(
        1,
        vec![
            Suggestion::new(
                "Use a hash map for O(n) lookup",
                DETAIL,
                "seen = {}\n    for i, num in enumerate(nums):\n        complement = target - num\n        if complement in seen:\n            return [seen[complement], i]\n        seen[num] = i",
            ),
            Suggestion::new(
                "Brute force with nested loops",
                DETAIL,
                "for i in range(len(nums)):\n        for j in range(i + 1, len(nums)):\n            if nums[i] + nums[j] == target:\n                return [i, j]",
            ),
            Suggestion::new(
                "Sort and use two pointers",
                DETAIL,
                "indexed = sorted(enumerate(nums), key=lambda x: x[1])\n    left, right = 0, len(indexed) - 1\n    while left < right:\n        total = indexed[left][1] + indexed[right][1]\n        if total == target:\n            return [indexed[left][0], indexed[right][0]]\n        elif total < target:\n            left += 1\n        else:\n            right -= 1",
            ),
        ],
    );

    // 2: Valid Parentheses
    by_problem.insert(
        2,
        vec![
            Suggestion::new(
                "Stack-based matching",
                DETAIL,
                "stack = []\n    mapping = {\")\": \"(\", \"}\": \"{\", \"]\": \"[\"}\n    for char in s:\n        if char in mapping:\n            top = stack.pop() if stack else \"#\"\n            if mapping[char] != top:\n                return False\n        else:\n            stack.append(char)\n    return not stack",
            ),
            Suggestion::new(
                "Replace pairs iteratively",
                DETAIL,
                "while \"()\" in s or \"{}\" in s or \"[]\" in s:\n        s = s.replace(\"()\", \"\").replace(\"{}\", \"\").replace(\"[]\", \"\")\n    return s == \"\"",
            ),
        ],
    );

    // 3: Reverse Linked List
    by_problem.insert(
        3,
        vec![
            Suggestion::new(
                "Iterative pointer reversal",
                DETAIL,
                "prev = None\n    current = head\n    while current:\n        next_node = current.next\n        current.next = prev\n        prev = current\n        current = next_node\n    return prev",
            ),
            Suggestion::new(
                "Recursive approach",
                DETAIL,
                "if not head or not head.next:\n        return head\n    new_head = reverse_list(head.next)\n    head.next.next = head\n    head.next = None\n    return new_head",
            ),
        ],
    );

    // 4: Binary Search
    by_problem.insert(
        4,
        vec![
            Suggestion::new(
                "Classic binary search loop",
                DETAIL,
                "left, right = 0, len(nums) - 1\n    while left <= right:\n        mid = (left + right) // 2\n        if nums[mid] == target:\n            return mid\n        elif nums[mid] < target:\n            left = mid + 1\n        else:\n            right = mid - 1\n    return -1",
            ),
            Suggestion::new(
                "Recursive binary search",
                DETAIL,
                "def helper(left, right):\n        if left > right:\n            return -1\n        mid = (left + right) // 2\n        if nums[mid] == target:\n            return mid\n        elif nums[mid] < target:\n            return helper(mid + 1, right)\n        else:\n            return helper(left, mid - 1)\n    return helper(0, len(nums) - 1)",
            ),
        ],
    );

    let default_list = vec![
        Suggestion::new("Initialize result variable", DETAIL, "result = None"),
        Suggestion::new("Iterate over input", DETAIL, "for item in data:\n        pass"),
    ];

    SuggestionCatalog::new(by_problem, default_list)
});

/// The catalog baked into the binary.
pub fn builtin_catalog() -> &'static SuggestionCatalog {
    &BUILTIN
}
