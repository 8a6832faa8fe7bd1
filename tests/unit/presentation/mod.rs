mod test_chart;
