pub mod leetcode;
