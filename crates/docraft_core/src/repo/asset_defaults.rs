//! Baked-in starter payloads for freshly created documents.
//!
//! Both payloads are base64-encoded HTML skeletons; the layer stores them
//! pre-encoded and never looks inside.

/// Landing page shown before an author replaces it.
pub(crate) const DEFAULT_INDEX_DOCUMENT: &str = "PCFET0NUWVBFIGh0bWw+CjxodG1sPgo8aGVhZD4KICAgIDxtZXRhIGNoYXJzZXQ9InV0Zi04Ij4KICAgIDx0aXRsZT5Ib21lPC90aXRsZT4KICAgIDxtZXRhIG5hbWU9InZpZXdwb3J0IiBjb250ZW50PSJ3aWR0aD1kZXZpY2Utd2lkdGgsIGluaXRpYWwtc2NhbGU9MSI+CiAgICA8bGluayByZWw9InNob3J0Y3V0IGljb24iIGhyZWY9ImltZy9pY29uLnN2ZyI+CiAgICA8bGluayBocmVmPSJjc3MvcGxheWVyLmNzcyIgcmVsPSJzdHlsZXNoZWV0IiB0eXBlPSJ0ZXh0L2NzcyI+CiAgICA8c2NyaXB0IHNyYz0ianMvYXBwLmpzIj48L3NjcmlwdD4KPC9oZWFkPgo8Ym9keT4KICAgIDxkaXYgaWQ9ImJvZHkiPgogICAgICAgIDxoZWFkZXI+CiAgICAgICAgICAgIDxoMT5Db21wb25lbnQgPHNwYW4+bmFtZTwvc3Bhbj48L2gxPgogICAgICAgICAgICA8aDI+QWN0aXZpdHkgdGl0bGU8L2gyPgogICAgICAgICAgICA8aW1nIHNyYz0iaW1nL2NvdmVyLnBuZyIgdGl0bGU9IkhvbWUiIC8+CiAgICAgICAgPC9oZWFkZXI+CiAgICAgICAgPG1haW4gaWQ9ImNvbnRlbnQiPgogICAgICAgICAgICA8ZGl2PgogICAgICAgICAgICAgICAgPHA+PHN0cm9uZz5Hb2FsOjwvc3Ryb25nPiBkZXNjcmliZSB0aGUgbGVhcm5pbmcgZ29hbCBvZiB0aGlzIHVuaXQuPC9wPgogICAgICAgICAgICAgICAgPHA+PHN0cm9uZz5Nb2RlOjwvc3Ryb25nPiBpbmRpdmlkdWFsPC9wPgogICAgICAgICAgICA8L2Rpdj4KICAgICAgICAgICAgPGRpdiBpZD0iZHVyYXRpb24iPkR1cmF0aW9uOiA8c3Bhbj40PC9zcGFuPiBob3VyczwvZGl2PgogICAgICAgIDwvbWFpbj4KICAgIDwvZGl2Pgo8L2JvZHk+CjwvaHRtbD4K";

/// Starter body for the editable content document.
pub(crate) const DEFAULT_CONTENT_DOCUMENT: &str = "PCFET0NUWVBFIGh0bWw+CjxodG1sPgo8aGVhZD4KICAgIDxtZXRhIGNoYXJzZXQ9InV0Zi04Ij4KICAgIDxsaW5rIHJlbD0ic2hvcnRjdXQgaWNvbiIgaHJlZj0iaW1nL2ljb24uc3ZnIj4KICAgIDxtZXRhIG5hbWU9InZpZXdwb3J0IiBjb250ZW50PSJ3aWR0aD1kZXZpY2Utd2lkdGgsIGluaXRpYWwtc2NhbGU9MSI+CiAgICA8dGl0bGU+SW50ZXJhY3RpdmUgY29udGVudDwvdGl0bGU+CiAgICA8bGluayBocmVmPSJjc3MvcGxheWVyLmNzcyIgcmVsPSJzdHlsZXNoZWV0IiB0eXBlPSJ0ZXh0L2NzcyI+CiAgICA8c2NyaXB0IHNyYz0ianMvYXBwLmpzIj48L3NjcmlwdD4KICAgIDxzY3JpcHQgc3JjPSJqcy9pbml0LmpzIj48L3NjcmlwdD4KPC9oZWFkPgo8Ym9keSBjbGFzcz0ibG9hZGluZyIgZGF0YS1kaXNwbGF5LW1vZGU9InNsaWRlcyIgZGF0YS1hcHByb3ZlLWxpbWl0PSI3MCI+CiAgICA8ZGl2IGlkPSJib2R5Ij4KICAgICAgICA8aGVhZGVyPgogICAgICAgICAgICA8aDI+SW50ZXJhY3RpdmUgY29udGVudCBwcm9kdWN0aW9uIHRlbXBsYXRlPC9oMj4KICAgICAgICAgICAgPG5hdiBsYWJlbD0iTWFpbiIgY2xhc3M9Imhvcml6b250YWwgbWFpbiI+CiAgICAgICAgICAgICAgICA8bWVudT4KICAgICAgICAgICAgICAgICAgICA8bWVudWl0ZW0gbGFiZWw9Ik92ZXJ2aWV3IiBkYXRhLXBhZ2U9InBhZy1ob21lIj48L21lbnVpdGVtPgogICAgICAgICAgICAgICAgICAgIDxtZW51aXRlbSBsYWJlbD0iQ29tcG9uZW50cyIgZGF0YS1wYWdlPSJwYWctY29tcG9uZW50cyI+PC9tZW51aXRlbT4KICAgICAgICAgICAgICAgIDwvbWVudT4KICAgICAgICAgICAgPC9uYXY+CiAgICAgICAgPC9oZWFkZXI+CiAgICAgICAgPG1haW4gc3R5bGU9ImRpc3BsYXk6IG5vbmU7Ij4KICAgICAgICAgICAgPHNlY3Rpb24gaWQ9InBhZ2VfMSIgZGF0YS1jbXB0LXR5cGU9InBhZ2UiIHB0aXRsZT0iUGFnZSBvbmUiPgogICAgICAgICAgICAgICAgPGRpdiBpZD0ic2VjdGlvbl8xIiBkYXRhLWNtcHQtdHlwZT0ic2VjdGlvbiIgZGF0YS10aXRsZT0iU2VjdGlvbiAxIj48L2Rpdj4KICAgICAgICAgICAgPC9zZWN0aW9uPgogICAgICAgIDwvbWFpbj4KICAgICAgICA8Zm9vdGVyPgogICAgICAgICAgICA8ZGl2IGNsYXNzPSJtZWFzdXJpbmctcHJvZ3Jlc3MiIGRhdGEtdHlwZT0iY2lyY2xlIj48L2Rpdj4KICAgICAgICAgICAgPGRpdiBpZD0icGFnZV9udW1iZXIiPjwvZGl2PgogICAgICAgIDwvZm9vdGVyPgogICAgPC9kaXY+CjwvYm9keT4KPC9odG1sPgo=";
